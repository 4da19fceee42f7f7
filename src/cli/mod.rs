//! Command-line interface
//!
//! A thin shell around the connector: loads configuration, runs the
//! fetchers into a JSONL sink, and exposes a connection check.

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;

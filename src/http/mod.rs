//! HTTP client for the Printful API
//!
//! One authenticated client is built per run and shared by every fetcher.

mod client;

pub use client::{PrintfulClient, BASE_URL};

#[cfg(test)]
mod tests;

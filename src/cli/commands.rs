//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Printful catalog source connector CLI
#[derive(Parser, Debug)]
#[command(name = "printful-source")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Inline config JSON
    #[arg(long, global = true)]
    pub config_json: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch all configured resource kinds into JSONL collections
    Sync {
        /// Directory for the emitted collections
        #[arg(short, long, default_value = "output")]
        output: PathBuf,
    },

    /// Test the API key with a single authenticated request
    Check,

    /// Print the default configuration as YAML
    Spec,
}

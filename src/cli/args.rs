//! CLI argument definitions using clap
//!
//! Commands:
//! - apidash init --config <path>
//! - apidash start --config <path>
//! - apidash query --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// apidash - Self-hostable API analytics dashboard backend
#[derive(Parser, Debug)]
#[command(name = "apidash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the data directory with an empty dashboard
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./apidash.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./apidash.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run a single query from stdin and exit
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./apidash.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

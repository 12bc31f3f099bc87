//! CLI argument definitions using clap
//!
//! Commands:
//! - bookdb init --config <path>
//! - bookdb start --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bookdb - A minimal, self-hostable book record service
#[derive(Parser, Debug)]
#[command(name = "bookdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the seed book document
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./bookdb.json")]
        config: PathBuf,
    },

    /// Start the bookdb server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./bookdb.json")]
        config: PathBuf,

        /// Port to bind, overriding config file and PORT variable
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

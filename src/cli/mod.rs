//! CLI module for bookdb
//!
//! Provides the command-line interface:
//! - init: Create the seed book document
//! - start: Boot the server and serve requests

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, start};
pub use errors::{CliError, CliResult};

//! CLI-specific error types
//!
//! Every CLI error is fatal: main prints it and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("book document {} already exists", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("failed to start server: {0}")]
    Boot(String),
}

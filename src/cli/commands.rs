//! CLI command implementations
//!
//! `init` seeds the book document; `start` resolves configuration, makes sure
//! the document exists, and runs the HTTP server on a tokio runtime.

use std::net::SocketAddr;
use std::path::Path;

use crate::api::ApiServer;
use crate::books::BookService;
use crate::config::Config;
use crate::observability::Logger;
use crate::store::{BookStore, JsonFileStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Start { config, port } => start(&config, port),
    }
}

/// Create the seed book document as an empty collection.
///
/// Refuses to clobber an existing document.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = JsonFileStore::new(config.data_file);

    if store.exists() {
        return Err(CliError::AlreadyInitialized(store.path().to_path_buf()));
    }
    store.save_all(&[])?;

    Logger::info(
        "initialized",
        &[("data_file", &store.path().display().to_string())],
    );

    Ok(())
}

/// Start the bookdb server.
///
/// Port resolution order: --port flag, then PORT environment variable, then
/// config file, then the default of 5000. An absent book document is created
/// empty; whatever document exists is served as-is.
pub fn start(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?.apply_env()?;
    if let Some(port) = port {
        config.port = port;
    }

    let addr: SocketAddr = config
        .socket_addr()
        .parse()
        .map_err(|e| CliError::Boot(format!("invalid bind address {}: {}", config.socket_addr(), e)))?;

    let store = JsonFileStore::new(config.data_file);
    if !store.exists() {
        Logger::warn(
            "data_file_missing",
            &[("data_file", &store.path().display().to_string())],
        );
    }
    store.ensure_exists()?;

    let server = ApiServer::new(BookService::new(store));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Boot(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .serve(addr)
            .await
            .map_err(|e| CliError::Boot(format!("HTTP server failed: {}", e)))
    })
}

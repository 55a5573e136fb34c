//! CLI command implementations

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::engine::{QueryDescriptor, QueryEngine};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::store::DashboardStore;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_json, write_response};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory (required)
    pub data_dir: String,

    /// HTTP server settings (optional, defaults apply)
    #[serde(default)]
    pub http: HttpServerConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.data_dir.is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }

        Ok(())
    }

    /// Data directory as a Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command. This is
/// the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Start { config, port } => start(&config, port),
        Command::Query { config } => query(&config),
    }
}

/// Initialize the data directory with an empty dashboard document
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = DashboardStore::open(config.data_path());

    if store.is_initialized() {
        return Err(CliError::already_initialized());
    }

    store.initialize()?;

    write_response(json!({
        "initialized": true,
        "data_file": store.path().display().to_string(),
    }))?;

    Ok(())
}

/// Start the HTTP server
pub fn start(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = DashboardStore::open(config.data_path());

    if !store.is_initialized() {
        return Err(CliError::not_initialized());
    }

    let mut http_config = config.http.clone();
    if let Some(port) = port {
        http_config.port = port;
    }

    Logger::info(
        "server_starting",
        &[
            ("addr", http_config.socket_addr()),
            ("data_file", store.path().display().to_string()),
        ],
    );

    let server = HttpServer::with_config(http_config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::server_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Run a single query from stdin and print the result to stdout
pub fn query(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = DashboardStore::open(config.data_path());

    if !store.is_initialized() {
        return Err(CliError::not_initialized());
    }

    let request = read_request()?;
    let descriptor: QueryDescriptor = serde_json::from_value(request)
        .map_err(|e| CliError::io_error(format!("Invalid query descriptor: {}", e)))?;

    let records = store.snapshot()?;
    let result = QueryEngine::query(&records, &descriptor);

    write_json(&serde_json::to_value(&result)?)?;

    Ok(())
}

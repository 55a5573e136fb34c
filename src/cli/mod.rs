//! CLI for apidash
//!
//! Commands:
//! - init: create the data directory and seed an empty dashboard
//! - start: boot the store and serve the HTTP API
//! - query: one-shot query from stdin against the current snapshot

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, query, run, run_command, start, Config};
pub use errors::{CliError, CliResult};
pub use io::{read_request, write_json, write_response};

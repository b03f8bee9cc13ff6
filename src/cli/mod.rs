//! CLI module for tabula
//!
//! Provides command-line interface for:
//! - tables: list the configured tables
//! - run: execute JSON-lines requests from stdin

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{execute, execute_request, run, run_command, serve, serve_requests, tables, Request};
pub use errors::{CliError, CliResult};
pub use io::{read_requests, write_error, write_response};

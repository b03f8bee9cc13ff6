//! CLI argument definitions using clap
//!
//! Commands:
//! - tabula tables --config <path>
//! - tabula run --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tabula - a strict, schema-validated in-memory record store
#[derive(Parser, Debug)]
#[command(name = "tabula")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the tables declared in the configuration
    Tables {
        /// Path to configuration file
        #[arg(long, default_value = "./tabula.json")]
        config: PathBuf,
    },

    /// Execute JSON-lines requests from stdin until EOF
    Run {
        /// Path to configuration file
        #[arg(long, default_value = "./tabula.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

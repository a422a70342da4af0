//! CLI argument definitions using clap
//!
//! Commands:
//! - heloc-screen serve --config <path>
//! - heloc-screen screen --config <path>
//! - heloc-screen model-info --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HELOC preliminary screening tool
#[derive(Parser, Debug)]
#[command(name = "heloc-screen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the screening form over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./heloc.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Screen one applicant read as JSON from stdin
    Screen {
        /// Path to configuration file
        #[arg(long, default_value = "./heloc.json")]
        config: PathBuf,
    },

    /// Print the loaded model's schema and cutoff
    ModelInfo {
        /// Path to configuration file
        #[arg(long, default_value = "./heloc.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! CLI module for the HELOC screening tool
//!
//! Provides command-line interface for:
//! - serve: Load the model and serve the screening form
//! - screen: One-shot screening of a JSON applicant on stdin
//! - model-info: Print the loaded model's schema and cutoff

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{boot, model_info, model_info_to, run, run_command, screen, screen_with, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request_from, write_error_to, write_response_to};

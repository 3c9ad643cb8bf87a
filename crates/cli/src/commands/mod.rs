//! Subcommand implementations.
//!
//! Each command returns the lines to print; logging goes to stderr so the
//! output stays pipeable.

pub mod catalog;
pub mod invoices;
pub mod orders;
pub mod session;
pub mod users;

use atelier_admin::api::ApiError;
use atelier_admin::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// API settings could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The storefront API call failed or was rejected.
    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),

    /// An authenticated command ran without a token.
    #[error("No admin token: pass --token or set ATELIER_TOKEN")]
    MissingToken,

    /// Bad argument value.
    #[error("{0}")]
    InvalidArgument(String),
}

/// Write command output to stdout.
#[allow(clippy::print_stdout)]
pub fn emit(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

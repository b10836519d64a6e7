//! Error types and handling for frontcheck
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only run-aborting failures live here. A file that fails validation is a
//! [`crate::validator::Diagnostic`], not an error.
//!
//! Sub-modules hold convenience constructors by error domain:
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;

pub use config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed, unknown_schema,
};
pub use fs::read_failed as file_read_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for frontcheck operations
#[derive(Error, Diagnostic, Debug)]
pub enum FrontcheckError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(frontcheck::config::not_found),
        help("Pass an existing file to --config or omit it to use the built-in collections")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(frontcheck::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(frontcheck::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(frontcheck::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Unknown schema '{name}'")]
    #[diagnostic(
        code(frontcheck::config::unknown_schema),
        help("Built-in schemas: blog, examples. Inline schemas use a `fields:` list")
    )]
    UnknownSchema { name: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(frontcheck::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Cannot determine the working directory: {reason}")]
    #[diagnostic(code(frontcheck::fs::working_dir))]
    WorkingDirUnavailable { reason: String },
}

impl From<serde_yaml::Error> for FrontcheckError {
    fn from(err: serde_yaml::Error) -> Self {
        FrontcheckError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FrontcheckError>;

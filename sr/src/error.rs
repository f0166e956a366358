//! Driver error types

use thiserror::Error;

/// Errors raised while parsing, extracting or reporting option values
///
/// Every variant is a runtime error: it is reported through the lifecycle
/// adapter and never confused with a usage error.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Failed to parse command line")]
    Parse(#[from] clap::Error),

    #[error("Option --{name} was not supplied")]
    MissingValue { name: String },

    #[error("Option --{name} expects a number, got '{value}'")]
    InvalidDouble {
        name: String,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Failed to write driver output")]
    Io(#[from] std::io::Error),
}

/// Result type alias for driver operations
pub type Result<T> = std::result::Result<T, DriverError>;

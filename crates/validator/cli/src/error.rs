//! CLI error types

use thiserror::Error;
use validator_types::{EngineError, IntakeError, SessionError};

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The document could not be taken in
    #[error("{0}")]
    Intake(#[from] IntakeError),

    /// The engine could not be initialized or invoked
    #[error("{0}")]
    Engine(#[from] EngineError),

    /// The session rejected an operation or recorded a failure
    #[error("{0}")]
    Session(#[from] SessionError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

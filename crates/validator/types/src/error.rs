//! Error taxonomy for validation sessions.
//!
//! Every error is a plain value: cloneable, comparable and serializable so
//! the session can store it and a presentation layer can render it.

use serde::Serialize;
use thiserror::Error;

/// Errors raised while turning input bytes into a candidate document.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum IntakeError {
    /// The file name does not carry a `.json` suffix.
    #[error("not a JSON file: {filename}")]
    WrongExtension { filename: String },

    /// The input could not be read or decoded as text.
    #[error("failed to read file: {reason}")]
    Unreadable { reason: String },

    /// The text is not valid JSON; carries the parser message.
    #[error("invalid JSON file: {0}")]
    MalformedJson(String),
}

/// Errors raised by the engine gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "camelCase")]
pub enum EngineError {
    /// `check` was called before initialization succeeded.
    #[error("validation engine is not initialized")]
    NotReady,

    /// The external engine failed or rejected the call.
    #[error("validation engine fault: {0}")]
    EngineFault(String),
}

/// Errors surfaced by the session orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "camelCase")]
pub enum SessionError {
    /// No document is loaded.
    #[error("no document loaded")]
    NoDocument,

    /// A validation is already in flight.
    #[error("a validation is already in progress")]
    AlreadyValidating,

    /// The engine has not been initialized (or failed to initialize).
    #[error("validation engine is not ready")]
    NotReady,

    /// The engine failed while validating.
    #[error("validation error: {0}")]
    EngineFault(String),
}

impl From<EngineError> for SessionError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NotReady => Self::NotReady,
            EngineError::EngineFault(message) => Self::EngineFault(message),
        }
    }
}

/// An unrecognized preset name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid validation preset: {0} (expected basic, extended or full)")]
pub struct ParsePresetError(pub String);

/// Result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

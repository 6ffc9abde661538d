//! Domain types for CSAF validation sessions
//!
//! This crate holds the vocabulary shared by every layer of the validator:
//!
//! - [`Preset`]: the conformance target a document is checked against
//! - [`CandidateDocument`]: a parsed, not-yet-validated document plus provenance
//! - [`RawResult`]: the engine payload, in every shape the engine has shipped
//! - [`ValidationOutcome`]: the canonical result consumed by presentation
//! - [`IntakeError`], [`EngineError`], [`SessionError`]: the error taxonomy
//!
//! The types carry no I/O. Intake, the engine gateway and the session
//! orchestrator live in their own crates and speak in these terms.

#![deny(unsafe_code)]

pub mod document;
pub mod error;
pub mod issue;
pub mod outcome;
pub mod preset;
pub mod raw;

pub use document::{format_bytes, CandidateDocument, DocumentId};
pub use error::{
    EngineError, EngineResult, IntakeError, IntakeResult, ParsePresetError, SessionError,
    SessionResult,
};
pub use issue::ValidationIssue;
pub use outcome::ValidationOutcome;
pub use preset::Preset;
pub use raw::{LegacyResult, RawIssue, RawResult, TestCaseResult, TestOutcome, TestStatus};

//! Session state and its read-only snapshot.

use std::sync::Arc;

use serde::Serialize;
use validator_engine::EngineStatus;
use validator_types::{CandidateDocument, DocumentId, Preset, SessionError, ValidationOutcome};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// No document loaded
    #[default]
    Empty,
    /// A document is loaded and not yet validated
    Loaded,
    /// A validation is in flight
    Validating,
    /// The last validation produced an outcome
    Validated,
    /// The last validation failed in the engine
    Failed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Empty => "empty",
            Phase::Loaded => "loaded",
            Phase::Validating => "validating",
            Phase::Validated => "validated",
            Phase::Failed => "failed",
        }
    }

    /// Whether no validation is in flight.
    pub fn is_idle(&self) -> bool {
        !matches!(self, Phase::Validating)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable state of one validation session.
///
/// Only the orchestrator writes to it. Once `phase` leaves `Validating`,
/// exactly one of `outcome` and `failure` is set.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub document: Option<Arc<CandidateDocument>>,
    pub preset: Preset,
    pub phase: Phase,
    pub outcome: Option<ValidationOutcome>,
    pub failure: Option<SessionError>,
}

impl Session {
    pub(crate) fn document_id(&self) -> Option<DocumentId> {
        self.document.as_ref().map(|doc| doc.id())
    }

    pub(crate) fn clear_results(&mut self) {
        self.outcome = None;
        self.failure = None;
    }
}

/// Metadata of the loaded document, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub id: DocumentId,
    pub filename: String,
    pub byte_size: u64,
    pub display_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csaf_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl From<&CandidateDocument> for DocumentInfo {
    fn from(doc: &CandidateDocument) -> Self {
        Self {
            id: doc.id(),
            filename: doc.filename().to_string(),
            byte_size: doc.byte_size(),
            display_size: doc.display_size(),
            csaf_version: doc.declared_csaf_version().map(str::to_string),
            title: doc.title().map(str::to_string),
        }
    }
}

/// Read-only copy of the session for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub preset: Preset,
    pub document: Option<DocumentInfo>,
    pub outcome: Option<ValidationOutcome>,
    pub failure: Option<SessionError>,
    pub engine: EngineStatus,
}

impl SessionSnapshot {
    pub(crate) fn capture(session: &Session, engine: EngineStatus) -> Self {
        Self {
            phase: session.phase,
            preset: session.preset,
            document: session.document.as_deref().map(DocumentInfo::from),
            outcome: session.outcome.clone(),
            failure: session.failure.clone(),
            engine,
        }
    }
}

//! Session orchestrator
//!
//! Owns the [`Session`] and drives it through its phases:
//!
//! ```text
//! Empty ──load──▶ Loaded ──validate──▶ Validating ──▶ Validated | Failed
//!   ▲               ▲ │                                   │
//!   │               └─┴──────────────load─────────────────┘
//!   └──────────────────────── clear (any phase) ──────────┘
//! ```
//!
//! The state lock is never held across an `.await`. A validation captures
//! the document identity when it starts; if a different document is current
//! when the engine answers, the answer is dropped.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};
use validator_engine::EngineGateway;
use validator_types::{
    CandidateDocument, DocumentId, EngineResult, IntakeResult, Preset, RawResult, SessionError,
    SessionResult,
};

use crate::config::SessionConfig;
use crate::intake::DocumentIntake;
use crate::normalizer::normalize;
use crate::session::{Phase, Session, SessionSnapshot};

/// What became of a completed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidateOutcome {
    /// The result was stored and the session moved to this phase.
    Applied(Phase),
    /// The session moved on (another document, or no run in flight); the
    /// result was dropped.
    Discarded,
}

/// The document and preset captured when a validation started.
///
/// Single-use: [`SessionOrchestrator::complete_validation`] consumes it.
#[derive(Debug)]
pub struct ValidationTicket {
    document: Arc<CandidateDocument>,
    preset: Preset,
}

impl ValidationTicket {
    pub fn document(&self) -> &CandidateDocument {
        &self.document
    }

    pub fn document_id(&self) -> DocumentId {
        self.document.id()
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }
}

/// Coordinates intake, the engine gateway and normalization for one session.
pub struct SessionOrchestrator {
    gateway: Arc<EngineGateway>,
    intake: DocumentIntake,
    state: Mutex<Session>,
}

impl SessionOrchestrator {
    pub fn new(gateway: Arc<EngineGateway>) -> Self {
        Self::with_config(gateway, SessionConfig::default())
    }

    pub fn with_config(gateway: Arc<EngineGateway>, config: SessionConfig) -> Self {
        Self {
            gateway,
            intake: DocumentIntake::new(config.intake),
            state: Mutex::new(Session::default()),
        }
    }

    pub fn gateway(&self) -> &Arc<EngineGateway> {
        &self.gateway
    }

    /// Initialize the engine (once per gateway).
    pub async fn initialize_engine(&self) -> SessionResult<()> {
        self.gateway.ensure_ready().await.map_err(SessionError::from)
    }

    /// Replace the current document.
    ///
    /// Allowed in every phase. On error the session is left as it was.
    pub fn load_document(&self, bytes: &[u8], filename: &str) -> IntakeResult<DocumentId> {
        let document = self.intake.load(bytes, filename)?;
        Ok(self.install(document))
    }

    /// Read a document from disk and make it current.
    pub async fn load_file(&self, path: impl AsRef<Path>) -> IntakeResult<DocumentId> {
        let document = self.intake.read_file(path).await?;
        Ok(self.install(document))
    }

    fn install(&self, document: CandidateDocument) -> DocumentId {
        let id = document.id();
        let mut state = self.state.lock();
        if state.phase == Phase::Validating {
            debug!(document = %id, "Document replaced during validation");
        }
        info!(
            document = %id,
            filename = document.filename(),
            bytes = document.byte_size(),
            "Document loaded"
        );
        state.document = Some(Arc::new(document));
        state.phase = Phase::Loaded;
        state.clear_results();
        id
    }

    /// Choose the preset for the next validation.
    pub fn set_preset(&self, preset: Preset) -> SessionResult<()> {
        let mut state = self.state.lock();
        if state.phase == Phase::Validating {
            return Err(SessionError::AlreadyValidating);
        }
        state.preset = preset;
        debug!(%preset, "Preset selected");
        Ok(())
    }

    /// Drop the document and any result; the preset goes back to its default.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        *state = Session::default();
        info!("Session cleared");
    }

    /// Enter `Validating` and capture what to validate.
    pub fn begin_validation(&self) -> SessionResult<ValidationTicket> {
        let mut state = self.state.lock();
        if state.phase == Phase::Validating {
            return Err(SessionError::AlreadyValidating);
        }
        if !self.gateway.is_ready() {
            return Err(SessionError::NotReady);
        }
        let document = state.document.clone().ok_or(SessionError::NoDocument)?;

        state.phase = Phase::Validating;
        state.clear_results();
        info!(document = %document.id(), preset = %state.preset, "Validation started");

        Ok(ValidationTicket {
            document,
            preset: state.preset,
        })
    }

    /// Store the engine's answer for `ticket`, unless the session moved on.
    pub fn complete_validation(
        &self,
        ticket: ValidationTicket,
        result: EngineResult<RawResult>,
    ) -> ValidateOutcome {
        let mut state = self.state.lock();
        if state.phase != Phase::Validating {
            warn!(
                document = %ticket.document_id(),
                phase = %state.phase,
                "Discarding validation result; no validation is in flight"
            );
            return ValidateOutcome::Discarded;
        }
        if state.document_id() != Some(ticket.document_id()) {
            warn!(
                document = %ticket.document_id(),
                "Discarding validation result for a document that is no longer loaded"
            );
            return ValidateOutcome::Discarded;
        }

        match result {
            Ok(raw) => {
                let outcome = normalize(&raw);
                info!(
                    document = %ticket.document_id(),
                    success = outcome.success(),
                    issues = outcome.issue_count(),
                    "Validation completed"
                );
                state.outcome = Some(outcome);
                state.failure = None;
                state.phase = Phase::Validated;
            }
            Err(err) => {
                let failure = SessionError::from(err);
                warn!(document = %ticket.document_id(), error = %failure, "Validation failed");
                state.outcome = None;
                state.failure = Some(failure);
                state.phase = Phase::Failed;
            }
        }
        ValidateOutcome::Applied(state.phase)
    }

    /// Validate the current document with the current preset.
    ///
    /// `Err` only for synchronous rejections; an engine failure is stored in
    /// the session and reported as `Applied(Phase::Failed)`.
    pub async fn validate(&self) -> SessionResult<ValidateOutcome> {
        let ticket = self.begin_validation()?;
        let result = self.gateway.check(&ticket.document, ticket.preset).await;
        Ok(self.complete_validation(ticket, result))
    }

    pub fn phase(&self) -> Phase {
        self.state.lock().phase
    }

    pub fn preset(&self) -> Preset {
        self.state.lock().preset
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let engine = self.gateway.status();
        let state = self.state.lock();
        SessionSnapshot::capture(&state, engine)
    }
}

impl std::fmt::Debug for SessionOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionOrchestrator")
            .field("gateway", &self.gateway)
            .field("phase", &self.phase())
            .finish()
    }
}

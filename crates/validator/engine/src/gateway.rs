//! Engine gateway - lazy initialization and invocation.
//!
//! The first `ensure_ready` call runs the engine's initialization; every
//! other caller, concurrent or later, observes that same result. A failed
//! initialization stays failed for the lifetime of the gateway.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};
use validator_types::{CandidateDocument, EngineError, EngineResult, Preset, RawResult};

use crate::engine::ValidationEngine;

/// Initialization state of the engine, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "camelCase")]
pub enum EngineStatus {
    /// Initialization has not finished (or not started).
    Pending,
    /// The engine is ready for `check` calls.
    Ready,
    /// Initialization failed; a restart is required.
    Failed(String),
}

/// Process-wide handle to the external engine.
pub struct EngineGateway {
    engine: Arc<dyn ValidationEngine>,
    ready: OnceCell<EngineResult<()>>,
}

impl EngineGateway {
    /// Wrap an engine. Nothing is initialized until [`ensure_ready`](Self::ensure_ready).
    pub fn new(engine: Arc<dyn ValidationEngine>) -> Self {
        Self {
            engine,
            ready: OnceCell::new(),
        }
    }

    /// Initialize the engine once and return the cached outcome.
    #[instrument(skip_all)]
    pub async fn ensure_ready(&self) -> EngineResult<()> {
        self.ready
            .get_or_init(|| async {
                debug!("Initializing validation engine");
                match self.engine.initialize().await {
                    Ok(()) => {
                        info!("Validation engine ready");
                        Ok(())
                    }
                    Err(e) => {
                        warn!(error = %e, "Validation engine failed to initialize");
                        Err(EngineError::EngineFault(e.to_string()))
                    }
                }
            })
            .await
            .clone()
    }

    /// Whether initialization has completed successfully.
    pub fn is_ready(&self) -> bool {
        matches!(self.ready.get(), Some(Ok(())))
    }

    pub fn status(&self) -> EngineStatus {
        match self.ready.get() {
            None => EngineStatus::Pending,
            Some(Ok(())) => EngineStatus::Ready,
            Some(Err(EngineError::EngineFault(message))) => EngineStatus::Failed(message.clone()),
            Some(Err(EngineError::NotReady)) => {
                EngineStatus::Failed(EngineError::NotReady.to_string())
            }
        }
    }

    /// Validate a document. Requires a successful [`ensure_ready`](Self::ensure_ready).
    #[instrument(skip_all, fields(document = %document.id(), preset = %preset))]
    pub async fn check(
        &self,
        document: &CandidateDocument,
        preset: Preset,
    ) -> EngineResult<RawResult> {
        if !self.is_ready() {
            return Err(EngineError::NotReady);
        }

        let json_text = document
            .to_json_text()
            .map_err(|e| EngineError::EngineFault(e.to_string()))?;

        debug!(bytes = json_text.len(), "Invoking validation engine");
        self.engine
            .check(&json_text, preset)
            .await
            .map_err(|e| EngineError::EngineFault(e.to_string()))
    }
}

impl std::fmt::Debug for EngineGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineGateway")
            .field("status", &self.status())
            .finish()
    }
}

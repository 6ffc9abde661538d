//! Recorded-payload engine.
//!
//! Answers every check with a payload captured from a real engine run.
//! Useful for inspecting how a stored engine response is presented, and
//! for exercising the session without a validator installed.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;
use validator_types::{Preset, RawResult};

use crate::engine::{BoxError, ValidationEngine};

enum Source {
    File(PathBuf),
    Memory(RawResult),
}

/// Engine that replays one recorded result.
pub struct ReplayEngine {
    source: Source,
    loaded: OnceCell<RawResult>,
}

impl ReplayEngine {
    /// Replay the payload stored in `path`; the file is read on initialization.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::File(path.into()),
            loaded: OnceCell::new(),
        }
    }

    /// Replay an in-memory payload.
    pub fn from_result(raw: RawResult) -> Self {
        Self {
            source: Source::Memory(raw),
            loaded: OnceCell::new(),
        }
    }
}

#[async_trait]
impl ValidationEngine for ReplayEngine {
    async fn initialize(&self) -> Result<(), BoxError> {
        let raw = match &self.source {
            Source::Memory(raw) => raw.clone(),
            Source::File(path) => {
                debug!(path = %path.display(), "Loading recorded engine payload");
                let text = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
                RawResult::from_json(&text)
                    .map_err(|e| format!("unrecognized result payload in {}: {}", path.display(), e))?
            }
        };
        // A second initialize keeps the first payload.
        let _ = self.loaded.set(raw);
        Ok(())
    }

    async fn check(&self, _json_text: &str, _preset: Preset) -> Result<RawResult, BoxError> {
        self.loaded
            .get()
            .cloned()
            .ok_or_else(|| "replay engine used before initialization".into())
    }
}

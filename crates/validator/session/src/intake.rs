//! Document intake
//!
//! Turns raw input into a [`CandidateDocument`]. Intake checks the file name
//! and that the bytes are JSON; whether the JSON is a valid CSAF document is
//! the engine's call.

use std::path::Path;

use tracing::debug;
use validator_types::{CandidateDocument, IntakeError, IntakeResult};

use crate::config::IntakeConfig;

const EXTENSION: &str = ".json";
const UTF8_BOM: &str = "\u{feff}";

/// Parses input bytes into candidate documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentIntake {
    config: IntakeConfig,
}

impl DocumentIntake {
    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Parse `bytes` received under `filename`.
    ///
    /// The reported size is the length of `bytes`, whatever the decoded
    /// text turns out to be.
    pub fn load(&self, bytes: &[u8], filename: &str) -> IntakeResult<CandidateDocument> {
        if !self.accepts(filename) {
            return Err(IntakeError::WrongExtension {
                filename: filename.to_string(),
            });
        }

        let text = std::str::from_utf8(bytes).map_err(|e| IntakeError::Unreadable {
            reason: format!("not UTF-8 text ({})", e),
        })?;
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

        let content: serde_json::Value =
            serde_json::from_str(text).map_err(|e| IntakeError::MalformedJson(e.to_string()))?;

        debug!(filename, bytes = bytes.len(), "Document parsed");
        Ok(CandidateDocument::new(content, filename, bytes.len() as u64))
    }

    /// Read and parse a file from disk, named after its final path component.
    pub async fn read_file(&self, path: impl AsRef<Path>) -> IntakeResult<CandidateDocument> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        // Reject by name before touching the disk.
        if !self.accepts(&filename) {
            return Err(IntakeError::WrongExtension { filename });
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| IntakeError::Unreadable {
                reason: format!("{}: {}", path.display(), e),
            })?;
        self.load(&bytes, &filename)
    }

    fn accepts(&self, filename: &str) -> bool {
        if self.config.case_sensitive_extension {
            filename.ends_with(EXTENSION)
        } else {
            filename.to_ascii_lowercase().ends_with(EXTENSION)
        }
    }
}

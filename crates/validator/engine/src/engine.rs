//! The external engine boundary.

use async_trait::async_trait;
use validator_types::{Preset, RawResult};

/// Opaque failure raised by an engine adapter.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An external validation engine.
///
/// Implementations wrap whatever actually performs the CSAF checks. The
/// engine accepts JSON text, not structured values, and answers with a
/// payload in any of the shapes [`RawResult`] understands.
#[async_trait]
pub trait ValidationEngine: Send + Sync {
    /// Load or instantiate the engine. Called at most once per gateway.
    async fn initialize(&self) -> Result<(), BoxError>;

    /// Validate `json_text` against `preset`.
    async fn check(&self, json_text: &str, preset: Preset) -> Result<RawResult, BoxError>;
}

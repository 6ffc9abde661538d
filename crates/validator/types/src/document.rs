//! Candidate documents
//!
//! A candidate document is whatever JSON the user handed us, parsed but not
//! yet validated, plus where it came from. Each load mints a fresh
//! [`DocumentId`]; the session uses it to tell an in-flight validation's
//! target apart from whatever document is current when the result lands.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identity of one loaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(uuid::Uuid);

impl DocumentId {
    /// Generate a new document ID.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Create from a UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc-{}", self.0)
    }
}

/// A parsed document awaiting validation
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateDocument {
    id: DocumentId,
    filename: String,
    byte_size: u64,
    content: Value,
}

impl CandidateDocument {
    /// Wrap parsed content with its provenance; a new identity is minted
    pub fn new(content: Value, filename: impl Into<String>, byte_size: u64) -> Self {
        Self {
            id: DocumentId::generate(),
            filename: filename.into(),
            byte_size,
            content,
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Size of the input buffer the document was parsed from
    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    /// Compact JSON text, the form handed to the engine
    pub fn to_json_text(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.content)
    }

    /// `/document/csaf_version`, if the document declares one
    pub fn declared_csaf_version(&self) -> Option<&str> {
        self.string_at("/document/csaf_version")
    }

    /// `/document/title`
    pub fn title(&self) -> Option<&str> {
        self.string_at("/document/title")
    }

    /// `/document/tracking/id`
    pub fn tracking_id(&self) -> Option<&str> {
        self.string_at("/document/tracking/id")
    }

    /// Human-readable size, e.g. `1.23 kB`
    pub fn display_size(&self) -> String {
        format_bytes(self.byte_size)
    }

    fn string_at(&self, pointer: &str) -> Option<&str> {
        self.content.pointer(pointer).and_then(Value::as_str)
    }
}

const UNITS: [&str; 5] = ["kB", "MB", "GB", "TB", "PB"];

/// Format a byte count with SI units and three significant digits.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1000.0;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    let mut decimals = significant_decimals(value);
    // 999.5 kB rounds to 1000 kB; show it as 1 MB instead.
    let scale = 10f64.powi(decimals as i32);
    if (value * scale).round() / scale >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
        decimals = significant_decimals(value);
    }

    let text = format!("{:.*}", decimals, value);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    format!("{} {}", text, UNITS[unit])
}

/// Decimals that keep three significant digits for `value` in `[1, 1000)`.
fn significant_decimals(value: f64) -> usize {
    if value >= 100.0 {
        0
    } else if value >= 10.0 {
        1
    } else {
        2
    }
}

//! Validation issues

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single problem reported against a candidate document.
///
/// `path` is a JSON pointer into the document; `None` marks a
/// document-level issue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ValidationIssue {
    /// Document-level issue
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    /// Issue anchored at a JSON pointer
    pub fn at(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn is_document_level(&self) -> bool {
        self.path.is_none()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} at {}", self.message, path),
            None => f.write_str(&self.message),
        }
    }
}

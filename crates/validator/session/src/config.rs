//! Session configuration.

use serde::{Deserialize, Serialize};

/// Configuration for document intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Require the literal lowercase `.json` suffix. When false, `.JSON`
    /// and other casings are accepted too.
    pub case_sensitive_extension: bool,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            case_sensitive_extension: true,
        }
    }
}

/// Configuration for a validation session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Intake settings.
    pub intake: IntakeConfig,
}

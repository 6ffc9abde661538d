//! Raw engine payloads
//!
//! The engine has shipped more than one result shape:
//!
//! - **Legacy**: a flat `errors` list next to `success`, `version`, `preset`.
//! - **Test cases**: one status per executed test in `testResults`, plus
//!   `numErrors` and, in some builds, the flat `errors` list as well.
//!
//! Test statuses have also been encoded two ways: serde's external tagging
//! (`"success"`, `{"failure": {"errors": [...]}}`) and a `kind` tag
//! (`{"kind": "Failure", "errors": [...]}`). Both decode into [`TestStatus`].
//!
//! [`RawResult`] is a closed set of these variants. Reconciling them into a
//! single outcome is the normalizer's job, not this module's.

use crate::{Preset, ValidationIssue};
use serde::{Deserialize, Serialize};

// ── Issues ───────────────────────────────────────────────────────────

/// An issue as the engine reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIssue {
    pub message: String,
    #[serde(
        rename = "instancePath",
        alias = "path",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub instance_path: Option<String>,
}

impl RawIssue {
    pub fn new(message: impl Into<String>, instance_path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            instance_path: Some(instance_path.into()),
        }
    }
}

impl From<&RawIssue> for ValidationIssue {
    /// An empty instance path denotes the document root and maps to no path.
    fn from(raw: &RawIssue) -> Self {
        Self {
            message: raw.message.clone(),
            path: raw.instance_path.clone().filter(|path| !path.is_empty()),
        }
    }
}

// ── Per-test outcomes ────────────────────────────────────────────────

/// Outcome of a single engine test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcome {
    pub test_id: String,
    pub status: TestStatus,
}

impl TestOutcome {
    pub fn new(test_id: impl Into<String>, status: TestStatus) -> Self {
        Self {
            test_id: test_id.into(),
            status,
        }
    }
}

/// Status of a single engine test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StatusRepr")]
pub enum TestStatus {
    Success,
    Failure { errors: Vec<RawIssue> },
    NotFound,
}

impl TestStatus {
    pub fn failure(errors: Vec<RawIssue>) -> Self {
        Self::Failure { errors }
    }

    /// Issues carried by this status; empty unless it is a failure
    pub fn issues(&self) -> &[RawIssue] {
        match self {
            Self::Failure { errors } => errors,
            Self::Success | Self::NotFound => &[],
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatusRepr {
    Kind(KindStatus),
    Tagged(TaggedStatus),
}

#[derive(Deserialize)]
#[serde(tag = "kind")]
enum KindStatus {
    #[serde(alias = "success")]
    Success,
    #[serde(alias = "failure")]
    Failure {
        #[serde(default)]
        errors: Vec<RawIssue>,
    },
    #[serde(alias = "notFound")]
    NotFound,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
enum TaggedStatus {
    #[serde(alias = "Success")]
    Success,
    #[serde(alias = "Failure")]
    Failure {
        #[serde(default)]
        errors: Vec<RawIssue>,
    },
    #[serde(alias = "NotFound")]
    NotFound,
}

impl From<StatusRepr> for TestStatus {
    fn from(repr: StatusRepr) -> Self {
        match repr {
            StatusRepr::Kind(KindStatus::Success) | StatusRepr::Tagged(TaggedStatus::Success) => {
                Self::Success
            }
            StatusRepr::Kind(KindStatus::NotFound) | StatusRepr::Tagged(TaggedStatus::NotFound) => {
                Self::NotFound
            }
            StatusRepr::Kind(KindStatus::Failure { errors })
            | StatusRepr::Tagged(TaggedStatus::Failure { errors }) => Self::Failure { errors },
        }
    }
}

// ── Result shapes ────────────────────────────────────────────────────

/// Early flat-errors payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default)]
    pub version: String,
    pub preset: Preset,
    pub errors: Vec<RawIssue>,
}

/// Per-test-case payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default)]
    pub version: String,
    pub preset: Preset,
    pub test_results: Vec<TestOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_errors: Option<usize>,
    /// Flat list some builds still emit alongside the per-test results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<RawIssue>>,
}

/// An engine payload in any known shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawResult {
    TestCases(TestCaseResult),
    Legacy(LegacyResult),
}

impl RawResult {
    /// Parse an engine payload from JSON text
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Interpret an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    pub fn engine_version(&self) -> &str {
        match self {
            Self::TestCases(r) => &r.version,
            Self::Legacy(r) => &r.version,
        }
    }

    pub fn preset(&self) -> Preset {
        match self {
            Self::TestCases(r) => r.preset,
            Self::Legacy(r) => r.preset,
        }
    }

    /// The engine's own success flag, when it sent one
    pub fn reported_success(&self) -> Option<bool> {
        match self {
            Self::TestCases(r) => r.success,
            Self::Legacy(r) => r.success,
        }
    }

    /// The engine's own error count, when it sent one
    pub fn reported_error_count(&self) -> Option<usize> {
        match self {
            Self::TestCases(r) => r.num_errors,
            Self::Legacy(_) => None,
        }
    }

    /// Top-level flat issue list, if the payload carries one
    pub fn flat_issues(&self) -> Option<&[RawIssue]> {
        match self {
            Self::TestCases(r) => r.errors.as_deref(),
            Self::Legacy(r) => Some(&r.errors),
        }
    }

    /// Per-test outcomes in engine order; empty for legacy payloads
    pub fn test_outcomes(&self) -> &[TestOutcome] {
        match self {
            Self::TestCases(r) => &r.test_results,
            Self::Legacy(_) => &[],
        }
    }
}

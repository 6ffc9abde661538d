//! The canonical validation outcome
//!
//! Whatever payload shape the engine produced, the rest of the system only
//! ever sees a [`ValidationOutcome`]. Its fields are private so the
//! `success == issues.is_empty()` invariant holds by construction.

use crate::{Preset, ValidationIssue};
use serde::Serialize;

/// Normalized, stable result of one validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    success: bool,
    engine_version: String,
    preset: Preset,
    issues: Vec<ValidationIssue>,
}

impl ValidationOutcome {
    /// Build an outcome; `success` is derived from `issues`
    pub fn new(engine_version: impl Into<String>, preset: Preset, issues: Vec<ValidationIssue>) -> Self {
        Self {
            success: issues.is_empty(),
            engine_version: engine_version.into(),
            preset,
            issues,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// Version string reported by the engine (the detected CSAF version)
    pub fn engine_version(&self) -> &str {
        &self.engine_version
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Issues in engine-reported order
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Issues paired with their 1-based display number
    pub fn numbered_issues(&self) -> impl Iterator<Item = (usize, &ValidationIssue)> {
        self.issues.iter().enumerate().map(|(i, issue)| (i + 1, issue))
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_tracks_emptiness() {
        assert!(ValidationOutcome::new("2.0", Preset::Basic, vec![]).success());
        let failed = ValidationOutcome::new(
            "2.0",
            Preset::Basic,
            vec![ValidationIssue::new("bad")],
        );
        assert!(!failed.success());
        assert_eq!(failed.issue_count(), 1);
    }

    #[test]
    fn test_numbering_starts_at_one() {
        let outcome = ValidationOutcome::new(
            "2.1",
            Preset::Full,
            vec![ValidationIssue::new("a"), ValidationIssue::new("b")],
        );
        let numbers: Vec<usize> = outcome.numbered_issues().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_serialized_shape() {
        let outcome = ValidationOutcome::new(
            "2.0",
            Preset::Extended,
            vec![ValidationIssue::at("missing field", "/document")],
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "engineVersion": "2.0",
                "preset": "extended",
                "issues": [{ "message": "missing field", "path": "/document" }]
            })
        );
    }
}

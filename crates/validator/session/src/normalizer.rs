//! Result normalization
//!
//! The single place where engine payload variance is absorbed. Every
//! [`RawResult`] variant maps to one [`ValidationOutcome`]:
//!
//! 1. A top-level flat issue list, when present, is the issue sequence.
//! 2. Otherwise the issues of every failing test are concatenated in test
//!    order. Passing and not-found tests contribute nothing.
//! 3. Success is whether the issue sequence is empty. The engine's own flag
//!    and error count are only cross-checked.
//! 4. Engine version and preset are copied as reported.

use tracing::{debug, warn};
use validator_types::{RawResult, ValidationIssue, ValidationOutcome};

/// Convert an engine payload into the canonical outcome.
pub fn normalize(raw: &RawResult) -> ValidationOutcome {
    let issues: Vec<ValidationIssue> = match raw.flat_issues() {
        Some(flat) => flat.iter().map(ValidationIssue::from).collect(),
        None => raw
            .test_outcomes()
            .iter()
            .flat_map(|test| test.status.issues())
            .map(ValidationIssue::from)
            .collect(),
    };

    let derived = issues.is_empty();
    if let Some(reported) = raw.reported_success() {
        if reported != derived {
            warn!(
                reported,
                issues = issues.len(),
                "Engine success flag disagrees with reported issues; using issues"
            );
        }
    }
    if let Some(count) = raw.reported_error_count() {
        if count != issues.len() {
            debug!(
                reported = count,
                collected = issues.len(),
                "Engine error count differs from collected issues"
            );
        }
    }

    ValidationOutcome::new(raw.engine_version(), raw.preset(), issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator_types::{
        LegacyResult, Preset, RawIssue, TestCaseResult, TestOutcome, TestStatus,
    };

    fn legacy(success: Option<bool>, errors: Vec<RawIssue>) -> RawResult {
        RawResult::Legacy(LegacyResult {
            success,
            version: "2.0".into(),
            preset: Preset::Basic,
            errors,
        })
    }

    fn test_cases(success: Option<bool>, tests: Vec<TestOutcome>) -> RawResult {
        RawResult::TestCases(TestCaseResult {
            success,
            version: "2.0".into(),
            preset: Preset::Basic,
            test_results: tests,
            num_errors: None,
            errors: None,
        })
    }

    fn a() -> RawIssue {
        RawIssue::new("A", "/document/title")
    }

    fn b() -> RawIssue {
        RawIssue::new("B", "/product_tree")
    }

    #[test]
    fn test_flat_and_nested_shapes_are_equivalent() {
        let flat = normalize(&legacy(Some(false), vec![a(), b()]));
        let nested = normalize(&test_cases(
            Some(false),
            vec![TestOutcome::new("6.1.1", TestStatus::failure(vec![a(), b()]))],
        ));
        assert_eq!(flat.issues(), nested.issues());
        assert_eq!(flat, nested);
    }

    #[test]
    fn test_issue_order_follows_test_order() {
        let x = RawIssue::new("X", "/x");
        let y = RawIssue::new("Y", "/y");
        let z = RawIssue::new("Z", "/z");
        let outcome = normalize(&test_cases(
            Some(false),
            vec![
                TestOutcome::new("T1", TestStatus::Success),
                TestOutcome::new("T2", TestStatus::failure(vec![x])),
                TestOutcome::new("T3", TestStatus::failure(vec![y, z])),
            ],
        ));

        let messages: Vec<&str> = outcome.issues().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_success_and_not_found_contribute_nothing() {
        let outcome = normalize(&test_cases(
            None,
            vec![
                TestOutcome::new("6.1.1", TestStatus::Success),
                TestOutcome::new("6.1.99", TestStatus::NotFound),
            ],
        ));
        assert!(outcome.success());
        assert!(outcome.issues().is_empty());
    }

    #[test]
    fn test_flat_list_takes_precedence_over_tests() {
        let raw = RawResult::TestCases(TestCaseResult {
            success: Some(false),
            version: "2.1".into(),
            preset: Preset::Full,
            test_results: vec![TestOutcome::new(
                "6.1.1",
                TestStatus::failure(vec![a(), b()]),
            )],
            num_errors: Some(2),
            errors: Some(vec![b()]),
        });
        let outcome = normalize(&raw);
        assert_eq!(outcome.issues(), &[ValidationIssue::from(&b())]);
    }

    #[test]
    fn test_success_flag_disagreement_derived_wins() {
        // Claims success but carries issues.
        let outcome = normalize(&legacy(Some(true), vec![a()]));
        assert!(!outcome.success());

        // Claims failure with no issues.
        let outcome = normalize(&legacy(Some(false), vec![]));
        assert!(outcome.success());
    }

    #[test]
    fn test_missing_flag_is_derived() {
        assert!(normalize(&legacy(None, vec![])).success());
        assert!(!normalize(&legacy(None, vec![a()])).success());
    }

    #[test]
    fn test_version_and_preset_copied() {
        let raw = RawResult::Legacy(LegacyResult {
            success: None,
            version: "2.1".into(),
            preset: Preset::Extended,
            errors: vec![],
        });
        let outcome = normalize(&raw);
        assert_eq!(outcome.engine_version(), "2.1");
        assert_eq!(outcome.preset(), Preset::Extended);
    }

    #[test]
    fn test_empty_instance_path_is_document_level() {
        let outcome = normalize(&legacy(None, vec![RawIssue::new("root problem", "")]));
        assert!(outcome.issues()[0].is_document_level());
    }

    #[test]
    fn test_normalizing_twice_is_identical() {
        let raw = test_cases(
            Some(false),
            vec![
                TestOutcome::new("T1", TestStatus::failure(vec![a()])),
                TestOutcome::new("T2", TestStatus::failure(vec![b()])),
            ],
        );
        assert_eq!(normalize(&raw), normalize(&raw));
    }
}

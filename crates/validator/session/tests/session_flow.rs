//! End-to-end session flow against a recorded engine payload.

use std::sync::Arc;

use serde_json::json;
use validator_engine::{EngineGateway, EngineStatus, ReplayEngine};
use validator_session::{Phase, SessionOrchestrator, ValidateOutcome};
use validator_types::{IntakeError, Preset, RawResult, ValidationIssue};

fn nested_failure() -> RawResult {
    RawResult::from_value(json!({
        "success": false,
        "version": "2.0",
        "preset": "extended",
        "testResults": [
            { "testId": "6.1.1", "status": "success" },
            {
                "testId": "6.1.2",
                "status": { "kind": "Failure", "errors": [
                    { "message": "missing field", "instancePath": "/document" }
                ] }
            }
        ],
        "numErrors": 1
    }))
    .unwrap()
}

fn orchestrator(raw: RawResult) -> SessionOrchestrator {
    let engine = Arc::new(ReplayEngine::from_result(raw));
    SessionOrchestrator::new(Arc::new(EngineGateway::new(engine)))
}

#[tokio::test]
async fn load_and_validate_with_extended_preset() {
    let session = orchestrator(nested_failure());
    session.initialize_engine().await.unwrap();

    // Eight bytes on disk, trailing newline included.
    session.load_document(b"{\"x\":1}\n", "doc.json").unwrap();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.phase, Phase::Loaded);
    let info = snapshot.document.unwrap();
    assert_eq!(info.filename, "doc.json");
    assert_eq!(info.byte_size, 8);
    assert_eq!(info.display_size, "8 B");

    session.set_preset(Preset::Extended).unwrap();
    let result = session.validate().await.unwrap();
    assert_eq!(result, ValidateOutcome::Applied(Phase::Validated));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.phase, Phase::Validated);
    assert_eq!(snapshot.engine, EngineStatus::Ready);
    let outcome = snapshot.outcome.unwrap();
    assert!(!outcome.success());
    assert_eq!(outcome.engine_version(), "2.0");
    assert_eq!(outcome.preset(), Preset::Extended);
    assert_eq!(
        outcome.issues(),
        &[ValidationIssue::at("missing field", "/document")]
    );
}

#[tokio::test]
async fn snapshot_serializes_for_presentation() {
    let session = orchestrator(nested_failure());
    session.initialize_engine().await.unwrap();
    session.load_document(br#"{"x":1}"#, "doc.json").unwrap();
    session.validate().await.unwrap();

    let value = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(value["phase"], "validated");
    assert_eq!(value["outcome"]["success"], false);
    assert_eq!(value["outcome"]["engineVersion"], "2.0");
    assert_eq!(value["outcome"]["issues"][0]["path"], "/document");
    assert!(value["failure"].is_null());
}

#[tokio::test]
async fn wrong_extension_is_rejected_before_parsing() {
    let session = orchestrator(nested_failure());
    let inputs: [&[u8]; 2] = [b"{}", b"garbage"];
    for bytes in inputs {
        assert_eq!(
            session.load_document(bytes, "advisory.txt"),
            Err(IntakeError::WrongExtension {
                filename: "advisory.txt".into()
            })
        );
    }
    assert_eq!(session.phase(), Phase::Empty);
}

#[tokio::test]
async fn failed_engine_initialization_blocks_validation() {
    let engine = Arc::new(ReplayEngine::from_file("/nonexistent/recorded.json"));
    let session = SessionOrchestrator::new(Arc::new(EngineGateway::new(engine)));

    assert!(session.initialize_engine().await.is_err());
    assert!(matches!(session.snapshot().engine, EngineStatus::Failed(_)));

    session.load_document(b"{}", "doc.json").unwrap();
    assert_eq!(
        session.validate().await,
        Err(validator_types::SessionError::NotReady)
    );
    assert_eq!(session.phase(), Phase::Loaded);
}

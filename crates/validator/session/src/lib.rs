//! Validation session orchestration
//!
//! A session holds at most one candidate document, the chosen preset, and
//! the lifecycle of the current validation attempt.
//!
//! # Architecture
//!
//! The [`SessionOrchestrator`] composes:
//!
//! - [`DocumentIntake`]: bytes + filename into a candidate document
//! - [`EngineGateway`]: the shared handle to the external engine
//! - [`normalize`]: any engine payload into a [`ValidationOutcome`]
//!
//! It is the only component that mutates [`Session`] state. Presentation
//! reads a [`SessionSnapshot`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use validator_engine::{EngineGateway, ReplayEngine};
//! use validator_session::{Phase, SessionOrchestrator, ValidateOutcome};
//! use validator_types::{LegacyResult, Preset, RawResult};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let engine = ReplayEngine::from_result(RawResult::Legacy(LegacyResult {
//!     success: Some(true),
//!     version: "2.0".into(),
//!     preset: Preset::Basic,
//!     errors: vec![],
//! }));
//! let gateway = Arc::new(EngineGateway::new(Arc::new(engine)));
//! let session = SessionOrchestrator::new(gateway);
//!
//! session.initialize_engine().await.unwrap();
//! session.load_document(br#"{"document":{}}"#, "advisory.json").unwrap();
//!
//! let result = session.validate().await.unwrap();
//! assert_eq!(result, ValidateOutcome::Applied(Phase::Validated));
//! assert!(session.snapshot().outcome.unwrap().success());
//! # }
//! ```
//!
//! [`EngineGateway`]: validator_engine::EngineGateway
//! [`ValidationOutcome`]: validator_types::ValidationOutcome

#![deny(unsafe_code)]

pub mod config;
pub mod intake;
pub mod normalizer;
pub mod orchestrator;
pub mod session;

pub use config::{IntakeConfig, SessionConfig};
pub use intake::DocumentIntake;
pub use normalizer::normalize;
pub use orchestrator::{SessionOrchestrator, ValidateOutcome, ValidationTicket};
pub use session::{DocumentInfo, Phase, Session, SessionSnapshot};

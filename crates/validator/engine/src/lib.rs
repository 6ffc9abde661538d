//! Validation engine gateway
//!
//! The conformance checks themselves belong to an external engine that we
//! can only initialize and invoke. This crate owns that boundary:
//!
//! - [`ValidationEngine`]: the trait an engine adapter implements
//! - [`EngineGateway`]: lazy one-time initialization, readiness, and
//!   invocation with failures mapped into [`EngineError`]
//! - [`ProcessEngine`]: drives an external validator executable
//! - [`ReplayEngine`]: serves a recorded payload
//!
//! The gateway is stateless per call. It does not serialize concurrent
//! `check` calls; keeping one validation in flight is the session's job.
//!
//! [`EngineError`]: validator_types::EngineError

#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod gateway;
pub mod process;
pub mod replay;

pub use config::ProcessEngineConfig;
pub use engine::{BoxError, ValidationEngine};
pub use gateway::{EngineGateway, EngineStatus};
pub use process::ProcessEngine;
pub use replay::ReplayEngine;

//! External validator process.
//!
//! Runs a validator executable per check: the document goes in on stdin,
//! a result payload comes back on stdout.

use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;
use validator_types::{Preset, RawResult};

use crate::config::ProcessEngineConfig;
use crate::engine::{BoxError, ValidationEngine};

/// Failures of the validator process.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {code}: {stderr}")]
    Exit {
        program: String,
        code: String,
        stderr: String,
    },

    #[error("unrecognized result payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Engine backed by an external validator command.
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    config: ProcessEngineConfig,
}

impl ProcessEngine {
    pub fn new(config: ProcessEngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessEngineConfig {
        &self.config
    }

    fn program(&self) -> String {
        self.config.program.display().to_string()
    }

    async fn run(&self, args: &[String], stdin: Option<&[u8]>) -> Result<Vec<u8>, ProcessError> {
        let mut child = Command::new(&self.config.program)
            .args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                program: self.program(),
                source,
            })?;

        // Stdin is fed while stdout and stderr are drained; a validator that
        // writes before it has read the whole document must not block us.
        let pipe = child.stdin.take();
        let feed = async move {
            match (stdin, pipe) {
                (Some(input), Some(mut pipe)) => match pipe.write_all(input).await {
                    // Dropping the pipe signals end of input.
                    Ok(()) => Ok(()),
                    // A validator that exits without draining stdin closes the
                    // pipe early; its exit status is what matters.
                    Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
                    Err(e) => Err(e),
                },
                _ => Ok(()),
            }
        };
        let (fed, output) = tokio::join!(feed, child.wait_with_output());

        let output = output.map_err(|source| ProcessError::Spawn {
            program: self.program(),
            source,
        })?;

        if !output.status.success() {
            return Err(ProcessError::Exit {
                program: self.program(),
                code: output
                    .status
                    .code()
                    .map(|c| format!("status {}", c))
                    .unwrap_or_else(|| "a signal".to_string()),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        fed.map_err(|source| ProcessError::Spawn {
            program: self.program(),
            source,
        })?;
        Ok(output.stdout)
    }
}

#[async_trait]
impl ValidationEngine for ProcessEngine {
    async fn initialize(&self) -> Result<(), BoxError> {
        debug!(program = %self.program(), "Probing validator executable");
        self.run(&self.config.probe_args, None).await?;
        Ok(())
    }

    async fn check(&self, json_text: &str, preset: Preset) -> Result<RawResult, BoxError> {
        let args = self.config.args_for(preset);
        let stdout = self.run(&args, Some(json_text.as_bytes())).await?;
        let raw: RawResult = serde_json::from_slice(&stdout).map_err(ProcessError::from)?;
        Ok(raw)
    }
}

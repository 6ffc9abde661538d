//! Engine adapter configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder substituted with the preset's wire name in command arguments.
pub const PRESET_PLACEHOLDER: &str = "{preset}";

/// Configuration for [`ProcessEngine`](crate::ProcessEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessEngineConfig {
    /// Validator executable, resolved through `PATH` when not absolute.
    pub program: PathBuf,

    /// Arguments for a validation run. `{preset}` is replaced by the preset
    /// name; the document is written to stdin.
    pub args: Vec<String>,

    /// Arguments for the initialization probe. The probe must exit with status 0.
    pub probe_args: Vec<String>,
}

impl Default for ProcessEngineConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("csaf-validator"),
            args: ["--preset", PRESET_PLACEHOLDER, "--format", "json", "-"]
                .into_iter()
                .map(String::from)
                .collect(),
            probe_args: vec!["--version".to_string()],
        }
    }
}

impl ProcessEngineConfig {
    /// Config for `program` with the default argument layout.
    pub fn for_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Validation arguments with the preset substituted.
    pub fn args_for(&self, preset: validator_types::Preset) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(PRESET_PLACEHOLDER, preset.as_str()))
            .collect()
    }
}

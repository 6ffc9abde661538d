//! CLI configuration

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator_engine::ProcessEngineConfig;
use validator_session::{IntakeConfig, SessionConfig};
use validator_types::Preset;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CliConfig {
    /// Preset used when `--preset` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_preset: Option<Preset>,

    /// External validator invocation
    pub engine: ProcessEngineConfig,

    /// Document intake settings
    pub intake: IntakeConfig,
}

impl CliConfig {
    /// Load configuration from file; a missing file yields the defaults
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig = toml::from_str(&contents)
                .map_err(|e| CliError::Config(format!("{}: {}", config_path.display(), e)))?;
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Session settings derived from this configuration
    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            intake: self.intake.clone(),
        }
    }

    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("csaf-check").join("config.toml"))
    }
}

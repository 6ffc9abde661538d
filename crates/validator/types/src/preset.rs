//! Validation presets
//!
//! A preset names the conformance target a document is validated against.
//! The wire form is the lowercase variant name, shared with the engine.

use crate::error::ParsePresetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named bundle of conformance rules applied during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Schema and mandatory tests (CSAF basic validator)
    #[default]
    Basic,
    /// Mandatory and recommended tests (CSAF extended validator)
    Extended,
    /// Mandatory, recommended and informative tests (CSAF full validator)
    Full,
}

impl Preset {
    /// All presets, from least to most strict
    pub const ALL: [Preset; 3] = [Preset::Basic, Preset::Extended, Preset::Full];

    /// Wire name understood by the engine
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Extended => "extended",
            Self::Full => "full",
        }
    }

    /// Short human description of the conformance target
    pub fn description(&self) -> &'static str {
        match self {
            Self::Basic => "Schema validation and mandatory tests",
            Self::Extended => "Basic plus recommended tests",
            Self::Full => "Extended plus informative tests",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = ParsePresetError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "basic" => Ok(Self::Basic),
            "extended" => Ok(Self::Extended),
            "full" => Ok(Self::Full),
            other => Err(ParsePresetError(other.to_string())),
        }
    }
}

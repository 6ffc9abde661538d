//! Preset listing

use crate::error::CliResult;
use crate::output::{print_output, OutputFormat};
use serde::Serialize;
use tabled::Tabled;
use validator_types::Preset;

/// Table row for preset display
#[derive(Debug, Serialize, Tabled)]
struct PresetRow {
    name: &'static str,
    description: &'static str,
}

impl From<Preset> for PresetRow {
    fn from(preset: Preset) -> Self {
        Self {
            name: preset.as_str(),
            description: preset.description(),
        }
    }
}

/// List every preset
pub fn execute(format: OutputFormat) -> CliResult<()> {
    let rows: Vec<PresetRow> = Preset::ALL.iter().copied().map(PresetRow::from).collect();
    print_output(rows, format)
}

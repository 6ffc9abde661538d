//! Recorded payload normalization

use std::path::Path;

use validator_session::normalize;
use validator_types::RawResult;

use crate::error::CliResult;
use crate::output::{print_outcome_table, print_single, OutputFormat};

/// Print the canonical outcome of a recorded engine payload
pub fn execute(path: &Path, format: OutputFormat) -> CliResult<()> {
    let contents = std::fs::read_to_string(path)?;
    let raw = RawResult::from_json(&contents)?;
    let outcome = normalize(&raw);

    match format {
        OutputFormat::Table => print_outcome_table(&outcome),
        _ => print_single(&outcome, format)?,
    }
    Ok(())
}

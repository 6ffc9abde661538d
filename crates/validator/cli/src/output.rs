//! Output formatting utilities

use crate::error::CliResult;
use colored::*;
use serde::Serialize;
use tabled::{Table, Tabled};
use validator_session::SessionSnapshot;
use validator_types::{ValidationIssue, ValidationOutcome};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print a vector of items in the specified format
pub fn print_output<T: Serialize + Tabled>(data: Vec<T>, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No results".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&data)?),
    }
    Ok(())
}

/// Print a single item as JSON or YAML; tables fall back to JSON
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(data)?),
    }
    Ok(())
}

/// Label/value row
#[derive(Debug, Tabled)]
struct FieldRow {
    field: &'static str,
    value: String,
}

impl FieldRow {
    fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Numbered issue row
#[derive(Debug, Tabled)]
struct IssueRow {
    #[tabled(rename = "#")]
    number: usize,
    message: String,
    path: String,
}

impl From<(usize, &ValidationIssue)> for IssueRow {
    fn from((number, issue): (usize, &ValidationIssue)) -> Self {
        Self {
            number,
            message: issue.message.clone(),
            path: issue.path.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Render a session snapshot as tables
pub fn print_snapshot_table(snapshot: &SessionSnapshot) {
    if let Some(doc) = &snapshot.document {
        let rows = vec![
            FieldRow::new("File", doc.filename.as_str()),
            FieldRow::new("Size", doc.display_size.as_str()),
            FieldRow::new("CSAF version", doc.csaf_version.as_deref().unwrap_or("-")),
            FieldRow::new("Title", doc.title.as_deref().unwrap_or("-")),
            FieldRow::new("Preset", snapshot.preset.as_str()),
        ];
        println!("{}", Table::new(rows));
    }

    if let Some(outcome) = &snapshot.outcome {
        print_outcome_table(outcome);
    }
}

/// Render a validation outcome as a summary plus numbered issue table
pub fn print_outcome_table(outcome: &ValidationOutcome) {
    println!("Engine version: {}", outcome.engine_version());
    println!("Preset: {}", outcome.preset());

    if outcome.success() {
        print_success("Document is valid");
        return;
    }

    print_warning(&format!("Errors: {}", outcome.issue_count()));
    let rows: Vec<IssueRow> = outcome.numbered_issues().map(IssueRow::from).collect();
    println!("{}", Table::new(rows));
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        let format = OutputFormat::default();
        assert!(matches!(format, OutputFormat::Table));
    }

    #[test]
    fn test_document_level_issue_row() {
        let issue = ValidationIssue::new("document is empty");
        let row = IssueRow::from((1, &issue));
        assert_eq!(row.path, "-");
        assert_eq!(row.number, 1);
    }
}

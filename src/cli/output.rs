use crate::cli::args::OutputFormat;
use crate::core::seeding::{ResourceIssue, SeedingReport};
use std::fmt::Write as _;
use std::io::{self, Write};
use tabled::{Table, Tabled};

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_report(&self, report: &SeedingReport) -> Result<(), OutputError>;
    fn write_error(&self, error: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Formatting error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<OutputError> for crate::domain::error::SeedingError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_report(&self, report: &SeedingReport) -> Result<(), OutputError> {
        let rendered = render_report(self.format, report)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "error": error,
                    "level": "error"
                });
                eprintln!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                eprintln!("Error: {}", error);
            }
        }
        Ok(())
    }
}

/// Render a report in the given format, newline terminated.
pub fn render_report(
    format: OutputFormat,
    report: &SeedingReport,
) -> Result<String, OutputError> {
    let mut out = String::new();
    match format {
        OutputFormat::Text => {
            writeln!(out, "Seeding report:")?;
            writeln!(out, "  {} brand(s)", report.brands)?;
            writeln!(out, "  {} catalog item(s)", report.catalog_items)?;
            writeln!(out, "  {} railway(s)", report.railways)?;
            writeln!(out, "  {} scale(s)", report.scales)?;
            if report.is_clean() {
                writeln!(out, "No issues found")?;
            } else {
                writeln!(out, "{} issue(s):", report.issues.len())?;
                for issue in &report.issues {
                    writeln!(
                        out,
                        "  [{}] {}: {}",
                        issue.resource_type, issue.path, issue.message
                    )?;
                }
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        }
        OutputFormat::Table => {
            let counts = vec![
                CountTableRow::new("brands", report.brands),
                CountTableRow::new("catalog_items", report.catalog_items),
                CountTableRow::new("railways", report.railways),
                CountTableRow::new("scales", report.scales),
            ];
            writeln!(out, "{}", Table::new(counts))?;
            if !report.is_clean() {
                let issues: Vec<IssueTableRow> =
                    report.issues.iter().map(IssueTableRow::from).collect();
                writeln!(out, "{}", Table::new(issues))?;
            }
        }
    }
    Ok(out)
}

/// Table row for resource counts
#[derive(Tabled)]
struct CountTableRow {
    #[tabled(rename = "Resource")]
    resource: &'static str,
    #[tabled(rename = "Records")]
    records: usize,
}

impl CountTableRow {
    fn new(resource: &'static str, records: usize) -> Self {
        Self { resource, records }
    }
}

/// Table row for report issues
#[derive(Tabled)]
struct IssueTableRow {
    #[tabled(rename = "Type")]
    resource_type: String,
    #[tabled(rename = "File")]
    path: String,
    #[tabled(rename = "Issue")]
    message: String,
}

impl From<&ResourceIssue> for IssueTableRow {
    fn from(issue: &ResourceIssue) -> Self {
        Self {
            resource_type: issue.resource_type.to_string(),
            path: issue.path.clone(),
            message: issue.message.clone(),
        }
    }
}

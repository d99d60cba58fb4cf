//! Result rendering for calculator commands
//!
//! Calculator results are flat label/value records. A [`Report`] carries
//! the rows for the line-oriented formats (tsv, csv, md) plus the serde
//! value for the structured formats (json, yaml); the auto format adds
//! styled sections the way the rest of the output is styled.

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::escape_csv;
use crate::cli::OutputFormat;

/// One output row: label, formatted value, unit suffix.
pub struct Row {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl Row {
    pub fn new(label: &'static str, value: String, unit: &'static str) -> Self {
        Self { label, value, unit }
    }
}

/// A rendered calculator report.
pub struct Report {
    pub title: &'static str,
    pub rows: Vec<Row>,
}

impl Report {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, label: &'static str, value: String, unit: &'static str) {
        self.rows.push(Row::new(label, value, unit));
    }

    /// Render the report in the requested format. The `result` value is
    /// used for json/yaml so those formats keep full float fidelity.
    pub fn print<T: Serialize>(&self, result: &T, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(result).into_diagnostic()?
                );
            }
            OutputFormat::Yaml => {
                print!("{}", serde_yml::to_string(result).into_diagnostic()?);
            }
            OutputFormat::Tsv => {
                for row in &self.rows {
                    println!("{}\t{}\t{}", row.label, row.value, row.unit);
                }
            }
            OutputFormat::Csv => {
                println!("metric,value,unit");
                for row in &self.rows {
                    println!(
                        "{},{},{}",
                        escape_csv(row.label),
                        escape_csv(&row.value),
                        row.unit
                    );
                }
            }
            OutputFormat::Md => {
                println!("| Metric | Value | Unit |");
                println!("|---|---|---|");
                for row in &self.rows {
                    println!("| {} | {} | {} |", row.label, row.value, row.unit);
                }
            }
            OutputFormat::Auto => {
                println!("{}", style(self.title).bold());
                println!("{}", style("─".repeat(44)).dim());
                let width = self.rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
                for row in &self.rows {
                    println!(
                        "{:<width$}  {} {}",
                        row.label,
                        style(&row.value).cyan().bold(),
                        style(row.unit).dim(),
                        width = width
                    );
                }
            }
        }
        Ok(())
    }
}

/// Print a dim section heading (auto format only).
pub fn section(title: &str) {
    println!();
    println!("{}", style(title).bold().underlined());
}

/// Print one step of a step-by-step breakdown.
pub fn step(expr: String) {
    println!("  {}", style(expr).dim());
}

/// Print an interpretation line ("what this means").
pub fn note(text: String) {
    println!("  {text}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_rows_preserve_order() {
        let mut report = Report::new("Test");
        report.push("first", "1".to_string(), "pcs");
        report.push("second", "2".to_string(), "sec");
        assert_eq!(report.rows[0].label, "first");
        assert_eq!(report.rows[1].value, "2");
    }
}

//! Output formatting for the maintainers-check CLI
//!
//! Table output prints one `error: ...` line per finding followed by a
//! summary line, so it can be grepped. JSON and YAML render the same data
//! for automation.

use chart_maintainers_core::{Finding, ValidationReport};
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::error::Result;

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// One line per finding, coloured when writing to a terminal
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format
    Yaml,
}

/// Rendering switches taken from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Drop the summary line
    pub quiet: bool,
    /// Print the suggested fix under each finding
    pub show_fixes: bool,
}

/// Check output structure for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutput {
    /// True when no finding was produced
    pub clean: bool,
    pub finding_count: usize,
    pub findings: Vec<FindingOutput>,
    pub maintainers_checked: usize,
    pub charts_maintained: usize,
    pub index_entries: usize,
    pub summary: String,
}

/// Individual finding output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingOutput {
    pub code: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub message: String,
    pub suggestion: String,
}

impl CheckOutput {
    pub fn from_report(report: &ValidationReport) -> Self {
        let finding_count = report.findings.len();
        let summary = match finding_count {
            0 => "no issues found".to_string(),
            1 => "1 issue found".to_string(),
            n => format!("{} issues found", n),
        };

        Self {
            clean: report.is_clean(),
            finding_count,
            findings: report.findings.iter().map(FindingOutput::from_finding).collect(),
            maintainers_checked: report.maintainers_checked,
            charts_maintained: report.charts_maintained,
            index_entries: report.index_entries,
            summary,
        }
    }

    /// Render to standard output
    pub fn render(&self, format: OutputFormat, options: RenderOptions) -> Result<()> {
        let mut stdout = io::stdout();
        self.render_to(&mut stdout, format, options)?;
        stdout.flush().ok();
        Ok(())
    }

    pub fn render_to<W: Write>(
        &self,
        out: &mut W,
        format: OutputFormat,
        options: RenderOptions,
    ) -> Result<()> {
        match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self)?;
                writeln!(out, "{}", json).ok();
            }
            OutputFormat::Yaml => {
                let yaml = serde_yaml::to_string(self)?;
                write!(out, "{}", yaml).ok();
            }
            OutputFormat::Table => self.render_table(out, options),
        }
        Ok(())
    }

    fn render_table<W: Write>(&self, out: &mut W, options: RenderOptions) {
        for finding in &self.findings {
            writeln!(out, "{}: {}", "error".red().bold(), finding.message).ok();
            if options.show_fixes {
                writeln!(
                    out,
                    "  {} {} {}",
                    finding.code.dimmed(),
                    "fix:".dimmed(),
                    finding.suggestion.green()
                )
                .ok();
            }
        }

        if options.quiet {
            return;
        }
        if self.clean {
            writeln!(out, "{}", self.summary.green()).ok();
        } else {
            writeln!(
                out,
                "{} ({} maintainers, {} charts, {} index entries)",
                self.summary.red().bold(),
                self.maintainers_checked,
                self.charts_maintained,
                self.index_entries
            )
            .ok();
        }
    }
}

impl FindingOutput {
    pub fn from_finding(finding: &Finding) -> Self {
        Self {
            code: finding.code().to_string(),
            kind: finding.kind().to_string(),
            chart: finding.chart().map(str::to_string),
            label: finding.label().map(str::to_string),
            message: finding.to_string(),
            suggestion: finding.suggestion(),
        }
    }
}

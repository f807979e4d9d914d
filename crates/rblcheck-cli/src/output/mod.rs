//! Output formatting for different formats.

use clap::ValueEnum;
use colored::Colorize;
use rblcheck_core::{LookupOutcome, ZoneReport};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed tables with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Single-zone result as printed by `check`.
#[derive(Debug, Serialize)]
struct CheckRecord<'a> {
    ip: &'a str,
    rbl: &'a str,
    listed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

/// Render the result of `check`.
pub fn render_outcome(
    format: OutputFormat,
    ip: &str,
    zone: &str,
    outcome: &LookupOutcome,
    color: bool,
) -> anyhow::Result<String> {
    let record = CheckRecord {
        ip,
        rbl: zone,
        listed: outcome.is_listed(),
        text: outcome.text(),
    };

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&record)?,
        OutputFormat::Yaml => serde_yaml::to_string(&record)?.trim_end().to_string(),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["ip", "rbl", "listed", "text"])?;
            writer.write_record([
                ip,
                zone,
                outcome.is_listed().to_string().as_str(),
                outcome.text().unwrap_or_default(),
            ])?;
            String::from_utf8(writer.into_inner()?)?.trim_end().to_string()
        }
        OutputFormat::Pretty => {
            let listed = if !color {
                outcome.is_listed().to_string()
            } else if outcome.is_listed() {
                "true".red().bold().to_string()
            } else {
                "false".green().to_string()
            };

            let mut out = String::new();
            writeln!(out, "IP: {ip}")?;
            writeln!(out, "RBL: {zone}")?;
            write!(out, "Listed: {listed}")?;
            if let Some(text) = outcome.text() {
                write!(out, "\nText: {text}")?;
            }
            out
        }
    };

    Ok(rendered)
}

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "List")]
    zone: String,
    #[tabled(rename = "Listed")]
    listed: String,
    #[tabled(rename = "Details")]
    details: String,
}

/// Render the per-zone reports of `scan`.
pub fn render_reports(
    format: OutputFormat,
    reports: &[ZoneReport],
    color: bool,
) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(reports)?,
        OutputFormat::Yaml => serde_yaml::to_string(reports)?.trim_end().to_string(),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["zone", "address", "listed", "text", "error"])?;
            for report in reports {
                writer.write_record([
                    report.zone.as_str(),
                    report.address.to_string().as_str(),
                    report.listed.to_string().as_str(),
                    report.text.as_deref().unwrap_or_default(),
                    report.error.as_deref().unwrap_or_default(),
                ])?;
            }
            String::from_utf8(writer.into_inner()?)?.trim_end().to_string()
        }
        OutputFormat::Pretty => {
            let rows = reports.iter().map(|report| ReportRow {
                zone: report.zone.to_string(),
                listed: listed_cell(report, color),
                details: report
                    .error
                    .clone()
                    .or_else(|| report.text.clone())
                    .unwrap_or_default(),
            });

            let mut table = Table::new(rows);
            table.with(Style::rounded());

            let listed = reports.iter().filter(|r| r.listed).count();
            let failed = reports.iter().filter(|r| r.is_error()).count();
            format!(
                "{table}\n{listed} of {} lists have this address ({failed} failed)",
                reports.len()
            )
        }
    };

    Ok(rendered)
}

fn listed_cell(report: &ZoneReport, color: bool) -> String {
    let (label, colored) = match (report.is_error(), report.listed) {
        (true, _) => ("error", "error".yellow().to_string()),
        (false, true) => ("yes", "yes".red().bold().to_string()),
        (false, false) => ("no", "no".green().to_string()),
    };
    if color {
        colored
    } else {
        label.to_string()
    }
}

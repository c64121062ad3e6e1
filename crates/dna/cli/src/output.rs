//! Output formatting utilities

use crate::error::CliResult;
use colored::*;
use serde::Serialize;
use std::io::Write;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain `condition -> action` lines
    #[default]
    Text,
    /// Pretty-printed table format
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Whether this format is a single structured document.
    pub fn is_structured(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Yaml)
    }
}

/// Write a serializable document as JSON or YAML.
///
/// Non-structured formats fall back to JSON.
pub fn write_document<W, T>(out: &mut W, data: &T, format: OutputFormat) -> CliResult<()>
where
    W: Write + ?Sized,
    T: Serialize,
{
    match format {
        OutputFormat::Yaml => write!(out, "{}", serde_yaml::to_string(data)?)?,
        _ => writeln!(out, "{}", serde_json::to_string_pretty(data)?)?,
    }
    Ok(())
}

/// Write rows as a table.
pub fn write_table<W: Write + ?Sized, T: Tabled>(out: &mut W, rows: Vec<T>) -> CliResult<()> {
    if rows.is_empty() {
        writeln!(out, "{}", "No results".dimmed())?;
    } else {
        writeln!(out, "{}", Table::new(rows))?;
    }
    Ok(())
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "FATAL:".red().bold(), message);
}

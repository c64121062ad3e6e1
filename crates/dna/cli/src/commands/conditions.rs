//! Listing the condition space

use crate::commands::with_stdout;
use crate::error::CliResult;
use crate::output::{write_document, write_table, OutputFormat};
use dna_types::{Condition, ConditionSpace, Flag};
use serde::Serialize;
use std::io::Write;
use tabled::Tabled;

#[derive(Debug, Serialize, Tabled)]
struct ConditionRow {
    flags: String,
    north: bool,
    south: bool,
    east: bool,
    west: bool,
    crowded: bool,
    neighbor: bool,
}

impl From<&Condition> for ConditionRow {
    fn from(condition: &Condition) -> Self {
        Self {
            flags: condition.canonical_form(),
            north: condition.is(Flag::North),
            south: condition.is(Flag::South),
            east: condition.is(Flag::East),
            west: condition.is(Flag::West),
            crowded: condition.is(Flag::Crowded),
            neighbor: condition.is(Flag::Neighbor),
        }
    }
}

/// Execute `conditions`
pub fn execute(format: OutputFormat) -> CliResult<()> {
    let space = ConditionSpace::generate();
    with_stdout(|out| render(out, &space, format))
}

fn render(out: &mut dyn Write, space: &ConditionSpace, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            for condition in space {
                writeln!(out, "{condition}")?;
            }
            Ok(())
        }
        OutputFormat::Table => write_table(out, space.iter().map(ConditionRow::from).collect()),
        OutputFormat::Json | OutputFormat::Yaml => write_document(out, space, format),
    }
}

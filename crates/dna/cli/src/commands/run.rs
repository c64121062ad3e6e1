//! Running an inline program against one condition

use crate::commands::with_stdout;
use crate::error::CliResult;
use crate::output::{write_document, write_table, OutputFormat};
use clap::Args;
use colored::*;
use dna_types::{Action, Condition, Program};
use dna_vm::Execution;
use serde::Serialize;
use std::io::Write;
use tabled::Tabled;
use tracing::debug;

/// Arguments for `run`
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Condition flags from NSEWCG, in any order (empty for none)
    #[arg(short, long, default_value = "")]
    pub condition: String,

    /// Show every instruction executed
    #[arg(short, long)]
    pub trace: bool,

    /// Opcode tokens, e.g. IS_CROWDED CJMP1 FINAL_MOVE_RANDOM
    #[arg(allow_hyphen_values = true)]
    pub opcodes: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct StepRow {
    position: usize,
    opcode: String,
    register: bool,
}

#[derive(Serialize)]
struct RunDocument {
    condition: Condition,
    action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<StepRow>>,
}

/// Execute `run`
pub fn execute(args: RunArgs, format: OutputFormat) -> CliResult<()> {
    let condition: Condition = args.condition.parse()?;
    let program = Program::decode(&args.opcodes)?;
    debug!(condition = %condition, instructions = program.len(), "Running program");

    let execution = dna_vm::trace(&program, &condition);
    with_stdout(|out| render(out, &condition, execution, args.trace, format))
}

fn render(
    out: &mut dyn Write,
    condition: &Condition,
    execution: Execution,
    show_steps: bool,
    format: OutputFormat,
) -> CliResult<()> {
    let steps: Vec<StepRow> = execution
        .steps
        .into_iter()
        .map(|step| StepRow {
            position: step.position,
            opcode: step.instruction.to_string(),
            register: step.register,
        })
        .collect();

    match format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let document = RunDocument {
                condition: *condition,
                action: execution.action,
                steps: show_steps.then_some(steps),
            };
            write_document(out, &document, format)
        }
        OutputFormat::Text => {
            if show_steps {
                for step in &steps {
                    writeln!(out, "{:>3} {} [{}]", step.position, step.opcode, step.register)?;
                }
            }
            writeln!(out, "{} -> {}", condition, execution.action)?;
            Ok(())
        }
        OutputFormat::Table => {
            if show_steps {
                write_table(out, steps)?;
            }
            let label = execution.action.to_string();
            let action = if !execution.action.is_terminal_marker() {
                label.dimmed()
            } else if execution.action == Action::Apoptosis {
                label.red()
            } else {
                label.green()
            };
            writeln!(out, "{} -> {}", condition, action)?;
            Ok(())
        }
    }
}

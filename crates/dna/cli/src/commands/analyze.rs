//! Exhaustive behaviour analysis of lifeform dumps

use crate::commands::with_stdout;
use crate::config::{AnalyzerConfig, ErrorPolicy};
use crate::error::{CliError, CliResult};
use crate::loader;
use crate::output::{write_document, write_table, OutputFormat};
use clap::Args;
use colored::*;
use dna_types::{ConditionSpace, Lifeform};
use dna_vm::{Analyzer, OrganismReport};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tabled::Tabled;
use tracing::{debug, info};

/// Arguments for `analyze`
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Lifeform JSON dumps, read in order
    pub files: Vec<PathBuf>,

    /// Skip malformed lifeform records instead of failing
    #[arg(long)]
    pub skip_invalid: bool,

    /// Leave out lifeforms that are no longer alive
    #[arg(long)]
    pub skip_dead: bool,

    /// Print per-lifeform action counts
    #[arg(long)]
    pub summary: bool,

    /// Analyze lifeforms one after another on the current task
    #[arg(long)]
    pub sequential: bool,
}

impl AnalyzeArgs {
    /// Flags only ever switch behaviour on; unset flags keep the file setting.
    fn apply(&self, mut config: AnalyzerConfig) -> AnalyzerConfig {
        if self.skip_invalid {
            config.on_error = ErrorPolicy::Skip;
        }
        if self.skip_dead {
            config.skip_dead = true;
        }
        if self.summary {
            config.summary = true;
        }
        if self.sequential {
            config.parallel = false;
        }
        config
    }
}

#[derive(Debug, Serialize, Tabled)]
struct OutcomeRow {
    /// Condition flags
    condition: String,
    /// Chosen action
    action: String,
}

#[derive(Debug, Serialize, Tabled)]
struct CountRow {
    action: String,
    conditions: usize,
}

#[derive(Serialize)]
struct ReportView<'a> {
    #[serde(flatten)]
    report: &'a OrganismReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_counts: Option<BTreeMap<String, usize>>,
}

#[derive(Serialize)]
struct AnalysisDocument<'a> {
    loaded: usize,
    lifeforms: Vec<ReportView<'a>>,
}

/// Execute `analyze`
pub async fn execute(
    args: AnalyzeArgs,
    config: AnalyzerConfig,
    format: OutputFormat,
) -> CliResult<()> {
    if args.files.is_empty() {
        return Err(CliError::NoInput);
    }
    let config = args.apply(config);
    debug!(?config, "Effective analyzer configuration");

    let lifeforms = loader::load_files(&args.files, &config).await?;
    let loaded = lifeforms.len();
    info!(lifeforms = loaded, parallel = config.parallel, "Analyzing lifeforms");

    let space = Arc::new(ConditionSpace::generate());
    let reports = if config.parallel {
        analyze_parallel(Arc::clone(&space), lifeforms).await?
    } else {
        Analyzer::new(&space).analyze_all(&lifeforms)
    };

    with_stdout(|out| render(out, loaded, &reports, config.summary, format))
}

/// One blocking task per lifeform; results are collected in input order.
async fn analyze_parallel(
    space: Arc<ConditionSpace>,
    lifeforms: Vec<Lifeform>,
) -> CliResult<Vec<OrganismReport>> {
    let handles: Vec<_> = lifeforms
        .into_iter()
        .map(|lifeform| {
            let space = Arc::clone(&space);
            tokio::task::spawn_blocking(move || Analyzer::new(&space).analyze(&lifeform))
        })
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        reports.push(handle.await?);
    }
    Ok(reports)
}

fn render(
    out: &mut dyn Write,
    loaded: usize,
    reports: &[OrganismReport],
    summary: bool,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Text => render_text(out, loaded, reports, summary),
        OutputFormat::Table => render_table(out, loaded, reports, summary),
        OutputFormat::Json | OutputFormat::Yaml => {
            let document = AnalysisDocument {
                loaded,
                lifeforms: reports
                    .iter()
                    .map(|report| ReportView {
                        report,
                        action_counts: summary.then(|| report.action_counts()),
                    })
                    .collect(),
            };
            write_document(out, &document, format)
        }
    }
}

fn render_text(
    out: &mut dyn Write,
    loaded: usize,
    reports: &[OrganismReport],
    summary: bool,
) -> CliResult<()> {
    writeln!(out, "Loaded {loaded} lifeforms")?;
    writeln!(out)?;
    for report in reports {
        writeln!(out, "Lifeform id {}, gen {}", report.id, report.generation)?;
        for outcome in &report.outcomes {
            writeln!(out, "{} -> {}", outcome.condition, outcome.action)?;
        }
        if summary {
            for (action, count) in report.action_counts() {
                writeln!(out, "  {action}: {count}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn render_table(
    out: &mut dyn Write,
    loaded: usize,
    reports: &[OrganismReport],
    summary: bool,
) -> CliResult<()> {
    writeln!(out, "Loaded {loaded} lifeforms")?;
    for report in reports {
        writeln!(out)?;
        let status = if report.alive { "alive".green() } else { "dead".red() };
        let decided = report
            .outcomes
            .iter()
            .filter(|outcome| outcome.action.is_terminal_marker())
            .count();
        writeln!(
            out,
            "{} (energy {:.2}, {}, {}/{} conditions decided)",
            format!("Lifeform id {}, gen {}", report.id, report.generation).bold(),
            report.energy,
            status,
            decided,
            report.outcomes.len()
        )?;

        let rows = report
            .outcomes
            .iter()
            .map(|outcome| OutcomeRow {
                condition: outcome.condition.to_string(),
                action: outcome.action.to_string(),
            })
            .collect();
        write_table(out, rows)?;

        if summary {
            let rows = report
                .action_counts()
                .into_iter()
                .map(|(action, conditions)| CountRow { action, conditions })
                .collect();
            write_table(out, rows)?;
        }
    }
    Ok(())
}

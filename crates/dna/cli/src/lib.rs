//! evol-dna - Command-line analysis of evolved lifeform Dna
//!
//! This CLI gives simulation operators a terminal interface to:
//! - Analyze lifeform dumps under every condition a lifeform can observe
//! - List the condition space
//! - Run inline opcode programs, optionally with a step trace
//! - Inspect the effective analyzer configuration

#![deny(unsafe_code)]

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;

use commands::{analyze, conditions, run};
pub use config::{AnalyzerConfig, ErrorPolicy, Preset};
pub use error::{CliError, CliResult};

/// evol-dna CLI application
#[derive(Parser)]
#[command(name = "evol-dna")]
#[command(about = "Analyze the behaviour encoded in evolved lifeform Dna", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(long, global = true, env = "EVOL_DNA_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (text, table, json, yaml)
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    output: output::OutputFormat,

    /// Start from a named configuration instead of the configuration file
    #[arg(long, global = true, value_enum)]
    preset: Option<Preset>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Show what each lifeform in one or more dumps does under every condition
    Analyze(analyze::AnalyzeArgs),

    /// List every distinct condition
    Conditions,

    /// Run opcodes given on the command line against one condition
    Run(run::RunArgs),

    /// Show the effective configuration
    Config,
}

/// Run using the current process arguments.
pub async fn run() -> CliResult<()> {
    run_with_args(std::env::args_os()).await
}

/// Run using the provided argument iterator.
pub async fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();

    let config = match cli.preset {
        Some(preset) => preset.config(),
        None => AnalyzerConfig::load(cli.config.as_deref())?,
    };

    match cli.command {
        Commands::Analyze(args) => analyze::execute(args, config, cli.output).await,
        Commands::Conditions => conditions::execute(cli.output),
        Commands::Run(args) => run::execute(args, cli.output),
        Commands::Config => show_config(cli.preset, cli.config, &config, cli.output),
    }
}

fn show_config(
    preset: Option<Preset>,
    path: Option<PathBuf>,
    config: &AnalyzerConfig,
    format: output::OutputFormat,
) -> CliResult<()> {
    use std::io::Write;

    if format.is_structured() {
        return commands::with_stdout(|out| output::write_document(out, config, format));
    }

    let source = match preset {
        Some(preset) => format!("preset {}", preset.name()),
        None => path
            .or_else(AnalyzerConfig::default_config_path)
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(defaults)".to_string()),
    };
    let body = toml::to_string(config).map_err(|e| CliError::Config(e.to_string()))?;

    commands::with_stdout(|out| {
        writeln!(out, "# source: {source}")?;
        write!(out, "{body}")?;
        Ok(())
    })
}

//! CLI error types

use dna_types::{ConditionParseError, DnaError, LifeformError};
use thiserror::Error;

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{path}: {source}")]
    Input {
        path: String,
        #[source]
        source: Box<CliError>,
    },

    #[error("Lifeform record {index}: {source}")]
    Lifeform {
        index: usize,
        #[source]
        source: LifeformError,
    },

    #[error("Dna error: {0}")]
    Dna(#[from] DnaError),

    #[error("Invalid condition: {0}")]
    Condition(#[from] ConditionParseError),

    #[error("No file specified")]
    NoInput,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Analysis task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl CliError {
    /// Whether this error only means stdout was closed by the reader
    /// (e.g. `evol-dna analyze dump.json | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, CliError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }

    /// Whether the command line itself was unusable.
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::NoInput)
    }

    /// Process exit status: 255 for usage errors, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        if self.is_usage() {
            255
        } else {
            1
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

//! CLI configuration

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What to do with a lifeform record that cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Fail the whole run.
    #[default]
    Abort,
    /// Log a warning and carry on without the record.
    Skip,
}

/// Named starting points for the analyzer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// Fail on the first bad record, analyze every lifeform
    Strict,
    /// Skip bad records and dead lifeforms
    Lenient,
}

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::Strict => "strict",
            Preset::Lenient => "lenient",
        }
    }

    pub fn config(self) -> AnalyzerConfig {
        match self {
            Preset::Strict => AnalyzerConfig::strict(),
            Preset::Lenient => AnalyzerConfig::lenient(),
        }
    }
}

/// Analyzer configuration, read from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Policy for malformed lifeform records.
    pub on_error: ErrorPolicy,
    /// Leave out lifeforms whose `alive` flag is false.
    pub skip_dead: bool,
    /// Analyze lifeforms on blocking worker tasks.
    pub parallel: bool,
    /// Print per-lifeform action counts.
    pub summary: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::Abort,
            skip_dead: false,
            parallel: true,
            summary: false,
        }
    }
}

impl AnalyzerConfig {
    /// Fail on the first bad record.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Skip bad records and dead lifeforms.
    pub fn lenient() -> Self {
        Self {
            on_error: ErrorPolicy::Skip,
            skip_dead: true,
            ..Self::default()
        }
    }

    /// Load configuration from file
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&contents)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(contents: &str) -> CliResult<Self> {
        toml::from_str(contents).map_err(|e| CliError::Config(e.to_string()))
    }

    /// `<config dir>/evol/dna.toml`, when the platform has a config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("evol").join("dna.toml"))
    }
}

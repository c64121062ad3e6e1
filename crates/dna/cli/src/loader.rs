//! Reading lifeform dumps.

use crate::config::{AnalyzerConfig, ErrorPolicy};
use crate::error::{CliError, CliResult};
use dna_types::Lifeform;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Parse one dump document: a JSON array of lifeform records.
pub fn parse_dump(contents: &str, config: &AnalyzerConfig) -> CliResult<Vec<Lifeform>> {
    let document: Value = serde_json::from_str(contents)?;
    let Value::Array(records) = document else {
        return Err(CliError::InvalidArgument(
            "lifeform dump must be a JSON array".into(),
        ));
    };

    let mut lifeforms = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match Lifeform::from_record(record) {
            Ok(lifeform) if config.skip_dead && !lifeform.alive => {
                info!(lifeform = lifeform.id, "Skipping dead lifeform");
            }
            Ok(lifeform) => lifeforms.push(lifeform),
            Err(source) => match config.on_error {
                ErrorPolicy::Abort => return Err(CliError::Lifeform { index, source }),
                ErrorPolicy::Skip => {
                    warn!(record = index, error = %source, "Skipping malformed lifeform");
                }
            },
        }
    }
    Ok(lifeforms)
}

/// Read and parse a dump file.
pub async fn load_file(path: &Path, config: &AnalyzerConfig) -> CliResult<Vec<Lifeform>> {
    let wrap = |source: CliError| CliError::Input {
        path: path.display().to_string(),
        source: Box::new(source),
    };
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| wrap(e.into()))?;
    parse_dump(&contents, config).map_err(wrap)
}

/// Read every dump in order and concatenate their lifeforms.
pub async fn load_files(paths: &[PathBuf], config: &AnalyzerConfig) -> CliResult<Vec<Lifeform>> {
    let mut lifeforms = Vec::new();
    for path in paths {
        let loaded = load_file(path, config).await?;
        info!(path = %path.display(), count = loaded.len(), "Loaded lifeform dump");
        lifeforms.extend(loaded);
    }
    Ok(lifeforms)
}

//! CLI commands

pub mod analyze;
pub mod conditions;
pub mod run;

use crate::error::CliResult;
use std::io::Write;

/// Hand a buffered writer over stdout to `write`, flushing at the end so a
/// closed pipe surfaces as an error instead of a panic.
pub(crate) fn with_stdout<F>(write: F) -> CliResult<()>
where
    F: FnOnce(&mut dyn Write) -> CliResult<()>,
{
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    write(&mut out)?;
    out.flush()?;
    Ok(())
}

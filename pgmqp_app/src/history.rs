use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use pgmqp::csv_io::write_csv;

/// Output path of the objective value history named by `LOG_VAL`, `None` if unset or empty.
pub fn hist_path_by_env() -> Option<PathBuf>
{
    let path = std::env::var("LOG_VAL").ok()?;
    let path = path.trim();

    if path.is_empty() {
        None
    }
    else {
        log::info!("LOG_VAL: {}", path);
        Some(PathBuf::from(path))
    }
}

/// Writes `hist` as CSV rows of an iteration number and an objective value.
pub fn write_history(path: &Path, hist: &[f64]) -> Result<()>
{
    write_csv(path, hist.len(), 2, |r, c| {
        if c == 0 {r as f64} else {hist[r]}
    }).with_context(|| format!("LOG_VAL: {}", path.display()))?;

    log::info!("value history of {} iterates saved", hist.len());

    Ok(())
}

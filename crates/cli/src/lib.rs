pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Canonicalize a campaign directory argument, failing early with a clear
/// message when it does not exist or is not a directory.
pub fn resolve_campaign_dir(dir: &str) -> Result<PathBuf> {
    let path = Path::new(dir);
    let resolved = path
        .canonicalize()
        .with_context(|| format!("Campaign directory does not exist: {}", path.display()))?;
    if !resolved.is_dir() {
        return Err(anyhow!("Not a directory: {}", resolved.display()));
    }
    Ok(resolved)
}

/// Install a stderr `tracing` subscriber filtered by `filter` (e.g. `warn`,
/// `diffcov_core=debug`). Stdout stays reserved for results.
pub fn init_logging(filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("Invalid log filter '{filter}'"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("Failed to initialize logging: {err}"))
}

use super::types::DecisionLog;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::Path;

/// Load the decision log from a JSON file
///
/// If the file doesn't exist, returns a new empty log.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_log(path: &Path) -> Result<DecisionLog> {
    if !path.exists() {
        return Ok(DecisionLog::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open decision log at {}", path.display()))?;

    let log: DecisionLog = serde_json::from_reader(file).context("Failed to load decision log")?;

    // Version check
    if log.version != 1 {
        anyhow::bail!("Unsupported decision log version: {}", log.version);
    }

    Ok(log)
}

/// Save the decision log to a JSON file atomically
///
/// Uses atomic-write-file so an interrupted write never corrupts past
/// decisions. Creates the parent directory if it doesn't exist.
pub fn save_log(path: &Path, log: &DecisionLog) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory at {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, log).context("Failed to serialize decision log")?;

    file.commit().context("Failed to save decision log")?;

    Ok(())
}

use super::types::Registry;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::Path;

/// Load the client registry from a JSON file
///
/// If the file doesn't exist, returns a new empty registry.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_registry(path: &Path) -> Result<Registry> {
    if !path.exists() {
        return Ok(Registry::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open client registry at {}", path.display()))?;

    let registry: Registry =
        serde_json::from_reader(file).context("Failed to load client registry")?;

    // Version check
    if registry.version != 1 {
        anyhow::bail!("Unsupported client registry version: {}", registry.version);
    }

    Ok(registry)
}

/// Save the client registry to a JSON file atomically
///
/// Uses atomic-write-file so the registry is never left half-written.
/// Creates the parent directory if it doesn't exist.
pub fn save_registry(path: &Path, registry: &Registry) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory at {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, registry)
        .context("Failed to serialize client registry")?;

    file.commit().context("Failed to save client registry")?;

    Ok(())
}

//! JSON seed file handling.
//!
//! The seed file is a JSON array of contacts. The store never touches
//! disk; the CLI reads the seed before running a command and writes it back
//! only when asked.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use contact_store::Contact;

/// Read contacts from `path`. A missing file is an empty directory.
pub fn read_seed(path: &Path) -> Result<Vec<Contact>> {
    if !path.exists() {
        info!("No seed file at {:?}, starting with an empty directory", path);
        return Ok(Vec::new());
    }

    let bytes =
        fs::read(path).with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let contacts: Vec<Contact> = serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

    info!("Read {} contacts from {:?}", contacts.len(), path);
    Ok(contacts)
}

/// Write contacts to `path` as a pretty-printed JSON array ordered by ID.
pub fn write_seed(path: &Path, contacts: &[&Contact]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create seed file directory")?;
    }

    let mut ordered = contacts.to_vec();
    ordered.sort_by(|a, b| a.contact_id().cmp(b.contact_id()));

    let json = serde_json::to_vec_pretty(&ordered).context("Failed to serialize contacts")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write seed file {}", path.display()))?;

    info!("Wrote {} contacts to {:?}", ordered.len(), path);
    Ok(())
}

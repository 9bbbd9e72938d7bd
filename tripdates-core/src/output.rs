//! Serialises trip possibilities to a JSON response file.

use crate::trip::TripCandidate;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Renders `candidates` as a JSON array, two-space indented when `pretty`.
pub fn to_json(candidates: &[TripCandidate], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(candidates)?
    } else {
        serde_json::to_string(candidates)?
    };
    Ok(json)
}

/// Writes `candidates` to `path`, creating missing parent directories.
/// An existing file is replaced.
pub fn write_response_file(path: &Path, candidates: &[TripCandidate], pretty: bool) -> Result<()> {
    info!(path = %path.display(), "Generating file...");

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating parent directory {}", parent.display()))?;
    }

    let json = to_json(candidates, pretty)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;

    info!(count = candidates.len(), "File generated successfully!");
    Ok(())
}

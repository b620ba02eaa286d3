// Artifact output (dist/<id>.json)

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File name for a package artifact.
///
/// Slashes become underscores so `vendor/tool` lands in `vendor_tool.json`
/// instead of a nested directory.
pub fn artifact_file_name(package_id: &str) -> String {
    format!("{}.json", package_id.replace('/', "_"))
}

/// Artifact path inside `out_dir`
pub fn artifact_path<P: AsRef<Path>>(out_dir: P, package_id: &str) -> PathBuf {
    out_dir.as_ref().join(artifact_file_name(package_id))
}

/// Write a package entry as 2-space indented JSON, replacing any existing file
pub fn write_artifact<P: AsRef<Path>>(path: P, entry: &Value) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(entry).context("Failed to serialize package entry")?;

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

// Package commands (apply)

use crate::artifact::{artifact_path, write_artifact};
use crate::manifest::Manifest;
use crate::{PmError, DEFAULT_MANIFEST_PATH, DEFAULT_OUT_DIR};
use anyhow::{Context, Result};
use std::path::{self, PathBuf};

/// Usage text for the apply command
pub const HELP_MESSAGE: &str = "
Usage: apply-package [options] <package-id>

Arguments after <package-id> are ignored.

Options:
  --manifest <PATH>  Package manifest (default: manifests/index.json)
  --out-dir <DIR>    Artifact output directory (default: dist)
  -h, --help         Print this message

This lightweight helper shows where automation for downloading and applying
packages will live. Future revisions will:
  - Fetch package metadata from manifests/index.json or a remote URL.
  - Download referenced assets and verify their checksums.
  - Prepare the package contents for import into the target system.
";

/// Where to read the manifest and where to write artifacts
#[derive(Debug, Clone)]
pub struct ApplyOptions {
    pub manifest_path: PathBuf,
    pub out_dir: PathBuf,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

/// Resolve `package_id` in the manifest and write its entry to the output directory.
///
/// Returns the absolute path of the written artifact. A missing entry fails
/// with [`PmError::PackageNotFound`] and leaves the output directory alone.
pub fn apply_package(package_id: &str, options: &ApplyOptions) -> Result<PathBuf> {
    let manifest = Manifest::from_file(&options.manifest_path)?;

    let Some(entry) = manifest.find_package(package_id)? else {
        log::warn!(
            "No entry for {:?} in {}",
            package_id,
            options.manifest_path.display()
        );
        return Err(PmError::PackageNotFound(package_id.to_string()).into());
    };

    let output_path = path::absolute(artifact_path(&options.out_dir, package_id))
        .context("Failed to resolve output path")?;
    log::debug!("Writing {} to {}", package_id, output_path.display());

    write_artifact(&output_path, entry)?;

    println!("Wrote package metadata to {}", output_path.display());

    Ok(output_path)
}

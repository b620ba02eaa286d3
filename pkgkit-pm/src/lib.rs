// pkgkit-pm - package manifest resolver
// Looks up a package entry in the local manifest and writes it out as an artifact.

pub mod artifact;
pub mod commands;
pub mod manifest;

use thiserror::Error;

pub use artifact::{artifact_file_name, artifact_path, write_artifact};
pub use commands::{apply_package, ApplyOptions, HELP_MESSAGE};
pub use manifest::Manifest;

/// Default manifest location, relative to the working directory
pub const DEFAULT_MANIFEST_PATH: &str = "manifests/index.json";

/// Default artifact output directory, relative to the working directory
pub const DEFAULT_OUT_DIR: &str = "dist";

#[derive(Debug, Error)]
pub enum PmError {
    #[error("Package \"{0}\" not found in manifest.")]
    PackageNotFound(String),

    #[error("Package entry {0} in manifest is null")]
    NullEntry(usize),
}

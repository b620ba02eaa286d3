// Manifest parser - manifests/index.json

use crate::PmError;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Package manifest (manifests/index.json)
///
/// Only `packages` is read. Entries stay raw JSON so every field is
/// passed through untouched, in manifest order.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub packages: Vec<Value>,
}

impl Manifest {
    /// Parse manifest from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let manifest = Self::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        log::debug!(
            "Loaded {} package(s) from {}",
            manifest.packages.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// Parse manifest from string
    pub fn from_str(content: &str) -> Result<Self> {
        let manifest: Manifest =
            serde_json::from_str(content).context("Invalid package manifest")?;
        Ok(manifest)
    }

    /// Find the first entry whose `id` is exactly `id`
    ///
    /// Entries that are not objects or carry no string `id` never match.
    /// A `null` entry reached before the match is an error.
    pub fn find_package(&self, id: &str) -> Result<Option<&Value>> {
        for (index, entry) in self.packages.iter().enumerate() {
            if entry.is_null() {
                return Err(PmError::NullEntry(index).into());
            }
            if entry.get("id").and_then(Value::as_str) == Some(id) {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_simple_manifest() {
        let json = r#"{
            "name": "catalog",
            "packages": [
                { "id": "agent-install", "version": "1.0.0" },
                { "id": "vendor/tool", "version": "2.1.0" }
            ]
        }"#;

        let manifest = Manifest::from_str(json).unwrap();
        assert_eq!(manifest.packages.len(), 2);
    }

    #[test]
    fn test_missing_packages_field() {
        assert!(Manifest::from_str(r#"{ "name": "catalog" }"#).is_err());
        assert!(Manifest::from_str("not json").is_err());
    }

    #[test]
    fn test_find_package_exact_match() {
        let manifest = Manifest::from_str(
            r#"{"packages":[{"id":"agent-install","version":"1.0.0"}]}"#,
        )
        .unwrap();

        let entry = manifest.find_package("agent-install").unwrap().unwrap();
        assert_eq!(entry["version"], "1.0.0");

        assert!(manifest.find_package("Agent-Install").unwrap().is_none());
        assert!(manifest.find_package(" agent-install").unwrap().is_none());
        assert!(manifest.find_package("missing-pkg").unwrap().is_none());
    }

    #[test]
    fn test_find_package_first_wins() {
        let manifest = Manifest::from_str(
            r#"{"packages":[
                {"id":"dup","rev":1},
                {"id":"dup","rev":2}
            ]}"#,
        )
        .unwrap();

        assert_eq!(manifest.find_package("dup").unwrap().unwrap()["rev"], 1);
    }

    #[test]
    fn test_find_package_skips_odd_entries() {
        let manifest = Manifest::from_str(
            r#"{"packages":[
                42,
                "text",
                {"name":"no-id"},
                {"id":7},
                {"id":"real"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            manifest.find_package("real").unwrap(),
            Some(&json!({"id": "real"}))
        );
        assert!(manifest.find_package("7").unwrap().is_none());
    }

    #[test]
    fn test_find_package_null_entry() {
        let manifest = Manifest::from_str(
            r#"{"packages":[
                {"id":"before"},
                null,
                {"id":"after"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            manifest.find_package("before").unwrap(),
            Some(&json!({"id": "before"}))
        );

        let err = manifest.find_package("after").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PmError>(),
            Some(PmError::NullEntry(1))
        ));
        assert!(manifest.find_package("missing-pkg").is_err());
    }

    #[test]
    fn test_numbers_keep_their_text() {
        let manifest = Manifest::from_str(
            r#"{"packages":[{"id":"n","a":1.0,"b":1e3,"c":1234567890123456789012345}]}"#,
        )
        .unwrap();

        let entry = manifest.find_package("n").unwrap().unwrap();
        let text = serde_json::to_string(entry).unwrap();
        assert_eq!(
            text,
            r#"{"id":"n","a":1.0,"b":1e3,"c":1234567890123456789012345}"#
        );
    }

    #[test]
    fn test_from_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");

        let err = Manifest::from_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("index.json"));

        fs::write(&path, "{ broken").unwrap();
        let err = Manifest::from_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse"));
    }
}

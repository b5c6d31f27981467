use crate::error::{GitVersionError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    version: Option<toml::Value>,
}

/// Read the declared `[package].version` from a Cargo manifest.
pub fn read_manifest_version<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    parse_manifest_version(&text)
        .map_err(|e| GitVersionError::config(format!("{}: {}", path.display(), e)))
}

fn parse_manifest_version(text: &str) -> std::result::Result<String, String> {
    let manifest: Manifest = toml::from_str(text).map_err(|e| e.to_string())?;

    match manifest.package.and_then(|package| package.version) {
        Some(toml::Value::String(version)) => Ok(version),
        // `version.workspace = true` and friends
        Some(_) => Err("package.version is not a plain string".to_string()),
        None => Err("no package.version found".to_string()),
    }
}

//! Fixture loading and management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Function being tested.
    pub function: String,
    /// POSIX/RFC section reference.
    pub spec_section: String,
    /// Input parameters: `af` (raw integer or family name), `src` (text or
    /// `null`), and an optional `src_repeat` count.
    pub inputs: serde_json::Value,
    /// Expected output: `1:<hex bytes>`, `0`, or `-1`.
    pub expected_output: String,
    /// Expected errno after call.
    pub expected_errno: i32,
    /// Whether this tests strict, hardened, or both behaviors.
    pub mode: String,
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let load = || -> Result<Self, HarnessError> {
            let content = std::fs::read_to_string(path)?;
            Ok(Self::from_json(&content)?)
        };
        load().map_err(|source| HarnessError::FixtureFile {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }
}

/// List the `*.json` files in `dir`, sorted by path.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();
    Ok(paths)
}

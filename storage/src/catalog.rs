//! Catalog loading: problems and tool descriptors from directories of JSON files.
//!
//! Each file holds either a single record or an array of records; file
//! contents are concatenated in directory iteration order. That order is not
//! guaranteed stable across filesystems and nothing here relies on it.

use crate::error::StorageError;
use crate::models::Problem;
use crate::paths::DataPaths;
use prompt::ToolDescriptor;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Read-only access to the problem and tool catalogs.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    problems_dir: PathBuf,
    tools_dir: PathBuf,
}

impl CatalogStore {
    pub fn new(paths: &DataPaths) -> Self {
        Self {
            problems_dir: paths.problems.clone(),
            tools_dir: paths.tools.clone(),
        }
    }

    /// Loads all problems from `problems/*.json`.
    pub fn load_problems(&self) -> Result<Vec<Problem>, StorageError> {
        load_json_records(&self.problems_dir)
    }

    /// Loads all tool descriptors from `tools/*.json`.
    pub fn load_tools(&self) -> Result<Vec<ToolDescriptor>, StorageError> {
        load_json_records(&self.tools_dir)
    }

    /// Loads specific tools by id, expecting one descriptor per `{id}.json`
    /// file. Missing or unreadable files are logged and skipped so one bad id
    /// does not abort the rest.
    pub fn load_tools_by_id(&self, ids: &[String]) -> Result<Vec<ToolDescriptor>, StorageError> {
        let mut tools = Vec::with_capacity(ids.len());
        for id in ids {
            let path = self.tools_dir.join(format!("{id}.json"));
            if !path.exists() {
                warn!(tool_id = %id, path = %path.display(), "tool file not found, skipping");
                continue;
            }
            match read_json::<ToolDescriptor>(&path) {
                Ok(tool) => tools.push(tool),
                Err(err) => {
                    warn!(tool_id = %id, error = %err, "failed to load tool, skipping");
                }
            }
        }
        Ok(tools)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Loads every record from `{dir}/*.json`, flattening array files. Per-file
/// and per-record errors are logged and skipped. A missing directory loads as
/// empty.
fn load_json_records<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>, StorageError> {
    let mut records = Vec::new();
    if !dir.exists() {
        return Ok(records);
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        let document: Value = match read_json(&path) {
            Ok(document) => document,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to load catalog file, skipping");
                continue;
            }
        };

        match document {
            Value::Array(items) => {
                for item in items {
                    match serde_json::from_value(item) {
                        Ok(record) => records.push(record),
                        Err(err) => {
                            warn!(path = %path.display(), error = %err, "skipping malformed record");
                        }
                    }
                }
            }
            item => match serde_json::from_value(item) {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping malformed record");
                }
            },
        }
    }

    Ok(records)
}

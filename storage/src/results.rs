//! Test-result persistence: one JSON file per completed generation.

use crate::error::StorageError;
use crate::models::TestRecord;
use crate::paths::DataPaths;
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;
use tracing::{info, warn};

/// Save/load access to the test-results directory.
#[derive(Debug, Clone)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    pub fn new(paths: &DataPaths) -> Self {
        Self {
            dir: paths.results.clone(),
        }
    }

    /// Writes one record, named by timestamp (colons replaced so the name is
    /// filesystem-safe and sorts chronologically) plus the test id. Returns
    /// the written path.
    pub fn save(&self, record: &TestRecord) -> Result<PathBuf, StorageError> {
        let stamp = record.timestamp.format("%Y-%m-%dT%H-%M-%S%.6f");
        let path = self.dir.join(format!("{stamp}_{}.json", record.test_id));
        let text = serde_json::to_string_pretty(record)?;
        fs::write(&path, text)?;
        info!(test_id = %record.test_id, path = %path.display(), "saved test record");
        Ok(path)
    }

    /// Loads one record by test id, matching the `_{test_id}.json` filename
    /// suffix.
    pub fn find_by_id(&self, test_id: &str) -> Result<TestRecord, StorageError> {
        if self.dir.exists() {
            let suffix = format!("_{test_id}.json");
            for entry in fs::read_dir(&self.dir)? {
                let path = entry?.path();
                let is_match = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| name.ends_with(&suffix))
                    .unwrap_or(false);
                if is_match {
                    let text = fs::read_to_string(&path)?;
                    return Ok(serde_json::from_str(&text)?);
                }
            }
        }
        Err(StorageError::NotFound(format!("test record {test_id}")))
    }

    /// Loads up to `limit` records, newest first by file modification time.
    /// Unreadable files are logged and skipped.
    pub fn load_history(&self, limit: usize) -> Result<Vec<TestRecord>, StorageError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut files: Vec<(SystemTime, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let modified = entry
                .metadata()?
                .modified()
                .unwrap_or(SystemTime::UNIX_EPOCH);
            files.push((modified, path));
        }
        files.sort_by(|a, b| b.0.cmp(&a.0));

        let mut records = Vec::new();
        for (_, path) in files.into_iter().take(limit) {
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "failed to read test record, skipping");
                    continue;
                }
            };
            match serde_json::from_str(&text) {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "failed to parse test record, skipping");
                }
            }
        }
        Ok(records)
    }
}

//! Data directory layout.

use crate::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};

/// The four data directories under one root (`data/` by default).
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub problems: PathBuf,
    pub tools: PathBuf,
    pub results: PathBuf,
    pub templates: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            problems: root.join("problems"),
            tools: root.join("tools"),
            results: root.join("test_results"),
            templates: root.join("templates"),
        }
    }

    /// Creates all data directories that do not exist yet.
    pub fn ensure(&self) -> Result<(), StorageError> {
        for dir in [&self.problems, &self.tools, &self.results, &self.templates] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new("data")
    }
}

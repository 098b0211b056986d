//! Saved prompt templates: one JSON file mapping name → {system, user}.
//!
//! Legacy files stored a bare system-prompt string per name; those are
//! normalized to `{system: <string>, user: ""}` at load time only and not
//! rewritten until the next save.

use crate::error::StorageError;
use crate::models::TemplateEntry;
use crate::paths::DataPaths;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

const TEMPLATES_FILE: &str = "saved_templates.json";

/// On-disk value: either the current shape or a legacy bare string.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTemplate {
    Entry(TemplateEntry),
    Legacy(String),
}

impl From<StoredTemplate> for TemplateEntry {
    fn from(stored: StoredTemplate) -> Self {
        match stored {
            StoredTemplate::Entry(entry) => entry,
            StoredTemplate::Legacy(system) => TemplateEntry {
                system,
                user: String::new(),
            },
        }
    }
}

/// Load/save access to the saved-templates file.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    pub fn new(paths: &DataPaths) -> Self {
        Self {
            path: paths.templates.join(TEMPLATES_FILE),
        }
    }

    /// Loads all saved templates. A missing file is an empty store; an
    /// unreadable or malformed file is logged and also treated as empty so
    /// the rest of the application keeps working.
    pub fn load(&self) -> BTreeMap<String, TemplateEntry> {
        if !self.path.exists() {
            return BTreeMap::new();
        }
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to read templates file");
                return BTreeMap::new();
            }
        };
        match serde_json::from_str::<BTreeMap<String, StoredTemplate>>(&text) {
            Ok(stored) => stored
                .into_iter()
                .map(|(name, value)| (name, value.into()))
                .collect(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to parse templates file");
                BTreeMap::new()
            }
        }
    }

    /// Saves (or overwrites) one named template, rewriting the whole file in
    /// the current format.
    pub fn save(&self, name: &str, system: &str, user: &str) -> Result<(), StorageError> {
        let mut templates = self.load();
        templates.insert(
            name.to_string(),
            TemplateEntry {
                system: system.to_string(),
                user: user.to_string(),
            },
        );
        let text = serde_json::to_string_pretty(&templates)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

//! Persisted record shapes: catalog problems, templates, and test records.

use chrono::{DateTime, Utc};
use generator::{GenerationMetadata, GenerationResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A problem description from the catalog. Read-only after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub problem_id: String,
    pub problem_text: String,
    #[serde(default = "default_domain")]
    pub domain: String,
    /// Maturity level, 1 (beginner) to 5 (advanced).
    #[serde(default = "default_level")]
    pub level: i64,
}

fn default_domain() -> String {
    "Unknown".to_string()
}

fn default_level() -> i64 {
    1
}

/// A saved prompt template: system prompt plus user prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub system: String,
    #[serde(default)]
    pub user: String,
}

/// The request configuration captured alongside a test's results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConfig {
    pub problem_id: String,
    pub problem_text: String,
    pub domain: String,
    pub level: i64,
    /// Tool ids that were part of the request.
    pub tools: Vec<String>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// One persisted test: results plus the configuration that produced them.
/// `metadata` duplicates `results.metadata` so history listings can read it
/// without descending into the results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRecord {
    pub test_id: String,
    pub timestamp: DateTime<Utc>,
    pub results: GenerationResult,
    pub config: TestConfig,
    pub metadata: GenerationMetadata,
}

impl TestRecord {
    /// Stamps a fresh record with a generated id and the current UTC time.
    pub fn new(results: GenerationResult, config: TestConfig) -> Self {
        Self {
            test_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            metadata: results.metadata.clone(),
            results,
            config,
        }
    }
}

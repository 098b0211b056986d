//! Pipeline types: request, solution, result, and metadata.

use prompt::ToolDescriptor;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Everything one generation needs. Constructed fresh per invocation; not persisted.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub problem_text: String,
    pub tools: Vec<ToolDescriptor>,
    pub system_prompt: String,
    /// `None` means the default user prompt template.
    pub user_prompt_template: Option<String>,
    /// Expected range [0, 1].
    pub temperature: f32,
    pub max_tokens: u32,
}

/// One suggested solution from the model. Missing fields are backfilled with
/// deterministic defaults at parse time; unknown extra keys are preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default)]
    pub tools_used: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Solution {
    /// The single fallback solution used when model output cannot be decoded.
    /// Carries the raw text verbatim for human inspection.
    pub fn degraded(raw: &str, tool_ids: &[String]) -> Self {
        Self {
            title: "Raw Response (JSON Parse Failed)".to_string(),
            prompt: raw.to_string(),
            tools_used: tool_ids.to_vec(),
            tags: vec!["parse_error".to_string()],
            extra: Map::new(),
        }
    }
}

fn default_title() -> String {
    "Untitled Solution".to_string()
}

fn default_prompt() -> String {
    "No prompt generated".to_string()
}

/// Token, cost, and timing accounting for one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub tokens: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cost_usd: f64,
    pub latency_ms: f64,
    pub model: String,
    pub temperature: f32,
}

/// Outcome of one generation: the parsed solutions (five expected, not
/// enforced) plus accounting metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub solutions: Vec<Solution>,
    pub metadata: GenerationMetadata,
}

//! Tolerant decoding of model output into solutions.
//!
//! Decode failure is a handled outcome, not an error: the caller always gets a
//! solutions list back, degraded to a single tagged entry when the raw text is
//! not the expected JSON.

use crate::types::Solution;
use serde_json::Value;
use tracing::warn;

/// Parses raw model output expecting `{"solutions": [...]}`.
///
/// On success, every entry is backfilled with defaults for missing fields,
/// unknown keys are preserved, and order is kept. Entries that are not objects
/// (or whose known fields have the wrong type) are skipped with a warning.
///
/// Malformed JSON or a non-object top level yields exactly one degraded
/// [`Solution`]: the raw text as prompt, the supplied `tool_ids` as
/// `tools_used`, and a `parse_error` tag. Never returns an error.
pub fn parse_solutions(raw: &str, tool_ids: &[String]) -> Vec<Solution> {
    let document: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "model output is not valid JSON; recording degraded result");
            return vec![Solution::degraded(raw, tool_ids)];
        }
    };

    let Value::Object(mut document) = document else {
        warn!("model output top level is not an object; recording degraded result");
        return vec![Solution::degraded(raw, tool_ids)];
    };

    let entries = match document.remove("solutions") {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            warn!(kind = %json_kind(&other), "`solutions` is not an array; treating as empty");
            Vec::new()
        }
        None => Vec::new(),
    };

    let mut solutions = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<Solution>(entry) {
            Ok(solution) => solutions.push(solution),
            Err(err) => warn!(error = %err, "skipping malformed solution entry"),
        }
    }
    solutions
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

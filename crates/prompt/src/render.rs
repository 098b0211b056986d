//! Tool-text rendering: descriptors → one markdown-ish text block for prompts.

use crate::descriptor::{ComplexTool, SimpleTool, SubSystem, ToolDescriptor};
use serde_json::Value;
use std::fmt::Write;

/// At most this many capabilities are listed per sub-system.
const MAX_CAPABILITIES: usize = 5;

/// Renders tool descriptors into a single text block for inclusion in a prompt.
///
/// Pure function. Entries appear in input order, separated by blank lines, each
/// prefixed with a `###` heading. Returns an empty string for an empty slice.
///
/// Within a tool, sub-systems and inputs render in sorted key order, not in
/// catalog file order. The order also decides which capabilities survive the
/// per-sub-system capability cap, so catalogs that care should keep at most
/// five plain-keyed string attributes per sub-system.
pub fn render_tool_text(tools: &[ToolDescriptor]) -> String {
    let mut out = String::new();
    for tool in tools {
        match tool {
            ToolDescriptor::Complex(tool) => render_complex(&mut out, tool),
            ToolDescriptor::Simple(tool) => render_simple(&mut out, tool),
        }
        out.push('\n');
    }
    out
}

fn render_complex(out: &mut String, tool: &ComplexTool) {
    let name = tool.main_system.as_deref().unwrap_or("Unknown Tool");
    let _ = writeln!(out, "\n### {}", name);
    let _ = writeln!(out, "- **Integration Score**: {}/10", score_text(tool));

    for (sub_id, sub) in &tool.sub_systems {
        let _ = writeln!(out, "\n#### {}", sub.system_name.as_deref().unwrap_or(sub_id));
        let _ = writeln!(
            out,
            "- **Description**: {}",
            sub.description.as_deref().unwrap_or("No description")
        );

        let capabilities = collect_capabilities(sub);
        if !capabilities.is_empty() {
            let _ = writeln!(out, "- **Capabilities**: {}", capabilities.join(", "));
        }
    }
}

fn score_text(tool: &ComplexTool) -> String {
    match &tool.integration_score {
        Some(Value::String(text)) => text.clone(),
        Some(value) => value.to_string(),
        None => "N/A".to_string(),
    }
}

/// Capabilities are string-valued attribute entries whose key contains no
/// underscore, across all inputs of the sub-system, truncated to
/// [`MAX_CAPABILITIES`]. The underscore heuristic is carried over from the
/// catalog format: human-readable fields use plain keys, machine fields use
/// snake_case.
fn collect_capabilities(sub: &SubSystem) -> Vec<String> {
    let mut capabilities = Vec::new();
    for input in sub.inputs.values() {
        let Some(attributes) = input.attributes.as_ref().and_then(Value::as_object) else {
            continue;
        };
        for (key, value) in attributes {
            if let Value::String(text) = value {
                if !key.contains('_') {
                    capabilities.push(text.clone());
                }
            }
        }
    }
    capabilities.truncate(MAX_CAPABILITIES);
    capabilities
}

fn render_simple(out: &mut String, tool: &SimpleTool) {
    let name = tool.display_name.as_deref().unwrap_or(&tool.tool_id);
    let _ = writeln!(out, "\n### {}", name);
    let _ = writeln!(out, "- **ID**: `{}`", tool.tool_id);
    let _ = writeln!(
        out,
        "- **Category**: {}",
        tool.category.as_deref().unwrap_or("Unknown")
    );
    let _ = writeln!(
        out,
        "- **Integration**: {}",
        tool.integration_status.as_deref().unwrap_or("Unknown")
    );

    if let Some(inputs) = &tool.inputs {
        out.push_str("- **What you can get from it**:\n");
        for input in inputs.values() {
            if !input.use_cases.is_empty() {
                let _ = writeln!(out, "  - {}", input.use_cases.join(", "));
            }
        }
    }
}

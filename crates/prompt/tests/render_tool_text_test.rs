//! Unit tests for [`prompt::render_tool_text`].
//!
//! Covers both descriptor shapes, default fallbacks, the capability
//! heuristic, and ordering. External interactions: none (pure function tests).

use prompt::{render_tool_text, ToolDescriptor};
use serde_json::json;

fn descriptor(value: serde_json::Value) -> ToolDescriptor {
    serde_json::from_value(value).expect("descriptor should deserialize")
}

/// **Test: A Simple descriptor without `inputs` renders without panicking and
/// omits the "What you can get from it" section.**
#[test]
fn simple_without_inputs_omits_use_case_section() {
    let tool = descriptor(json!({
        "tool_id": "apple_watch",
        "display_name": "Apple Watch",
        "category": "Wearable",
        "integration_status": "manual"
    }));

    let out = render_tool_text(&[tool]);

    assert!(out.contains("### Apple Watch"));
    assert!(out.contains("- **ID**: `apple_watch`"));
    assert!(out.contains("- **Category**: Wearable"));
    assert!(out.contains("- **Integration**: manual"));
    assert!(!out.contains("What you can get from it"));
}

/// **Test: Simple descriptor with only `tool_id` falls back to id as heading
/// and "Unknown" for category and integration status.**
#[test]
fn simple_minimal_uses_defaults() {
    let tool = descriptor(json!({"tool_id": "spotify"}));

    let out = render_tool_text(&[tool]);

    assert!(out.contains("### spotify"));
    assert!(out.contains("- **Category**: Unknown"));
    assert!(out.contains("- **Integration**: Unknown"));
}

/// **Test: Simple descriptor inputs render comma-joined use cases; inputs with
/// empty use-case lists produce the section header but no line.**
#[test]
fn simple_inputs_render_use_cases() {
    let tool = descriptor(json!({
        "tool_id": "maps",
        "inputs": {
            "history": {"use_cases": ["trip planning", "commute review"]},
            "empty": {"use_cases": []}
        }
    }));

    let out = render_tool_text(&[tool]);

    assert!(out.contains("- **What you can get from it**:"));
    assert!(out.contains("  - trip planning, commute review"));
    // Exactly one use-case line: the empty input contributes nothing.
    assert_eq!(out.matches("  - ").count(), 1);
}

/// **Test: Complex capabilities are truncated to 5 and underscore-keyed
/// attributes are excluded regardless of value type.**
#[test]
fn complex_capabilities_truncated_and_filtered() {
    let tool = descriptor(json!({
        "main_system": "Apple Home",
        "integration_score": 8,
        "sub_systems": {
            "lights": {
                "system_name": "Lighting",
                "description": "Smart bulbs",
                "inputs": {
                    "state": {
                        "attributes": {
                            "a": "one", "b": "two", "c": "three",
                            "d": "four", "e": "five", "f": "six",
                            "snake_key": "excluded by key",
                            "other_snake": 42
                        }
                    }
                }
            }
        }
    }));

    let out = render_tool_text(&[tool]);

    assert!(out.contains("### Apple Home"));
    assert!(out.contains("- **Integration Score**: 8/10"));
    let caps_line = out
        .lines()
        .find(|line| line.starts_with("- **Capabilities**:"))
        .expect("capabilities line");
    assert_eq!(caps_line.matches(", ").count(), 4, "five entries expected");
    assert!(!caps_line.contains("excluded by key"));
    assert!(!caps_line.contains("six"));
}

/// **Test: Non-string attribute values never count as capabilities; a
/// sub-system with none omits the capabilities line entirely.**
#[test]
fn complex_non_string_attributes_yield_no_capabilities() {
    let tool = descriptor(json!({
        "main_system": "Hub",
        "sub_systems": {
            "sensors": {
                "inputs": {
                    "reading": {
                        "attributes": {
                            "level": 3,
                            "nested": {"inner": "still not a leaf string here"}
                        }
                    }
                }
            }
        }
    }));

    let out = render_tool_text(&[tool]);
    assert!(!out.contains("Capabilities"));
}

/// **Test: Complex defaults — missing score renders "N/A/10", a sub-system
/// without `system_name` uses its key, and a missing description renders
/// "No description".**
#[test]
fn complex_defaults() {
    let tool = descriptor(json!({
        "sub_systems": {
            "climate": {}
        }
    }));

    let out = render_tool_text(&[tool]);

    assert!(out.contains("### Unknown Tool"));
    assert!(out.contains("- **Integration Score**: N/A/10"));
    assert!(out.contains("#### climate"));
    assert!(out.contains("- **Description**: No description"));
}

/// **Test: Output preserves input order of tools and separates entries with a
/// blank line.**
#[test]
fn tools_render_in_input_order() {
    let first = descriptor(json!({"tool_id": "alpha"}));
    let second = descriptor(json!({"tool_id": "beta"}));

    let out = render_tool_text(&[first, second]);

    let alpha = out.find("### alpha").expect("alpha heading");
    let beta = out.find("### beta").expect("beta heading");
    assert!(alpha < beta);
    assert!(out.contains("\n\n### beta"));
}

/// **Test: Empty input renders to an empty string.**
#[test]
fn empty_tool_list_renders_empty() {
    assert_eq!(render_tool_text(&[]), "");
}

/// **Test: A record carrying both `sub_systems` and `tool_id` deserializes as
/// Complex (sub_systems takes precedence).**
#[test]
fn sub_systems_win_variant_dispatch() {
    let tool = descriptor(json!({
        "tool_id": "dual",
        "main_system": "Dual Shape",
        "sub_systems": {}
    }));

    assert!(matches!(tool, ToolDescriptor::Complex(_)));
    assert_eq!(tool.tool_id(), "dual_shape");
}

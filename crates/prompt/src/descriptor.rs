//! Tool descriptor types: the two catalog record shapes and their sub-structures.
//!
//! Catalog files contain either a Simple record (`tool_id` + flat metadata) or a
//! Complex record (`main_system` + `sub_systems`). The variant is chosen at
//! deserialization time: presence of `sub_systems` means Complex, otherwise
//! `tool_id` means Simple.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A tool/app/device descriptor in one of two catalog shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ToolDescriptor {
    /// Record with `sub_systems`; tried first so a record carrying both
    /// `sub_systems` and `tool_id` resolves as Complex.
    Complex(ComplexTool),
    /// Flat record keyed by `tool_id`.
    Simple(SimpleTool),
}

impl ToolDescriptor {
    /// Canonical id: Simple uses `tool_id`; Complex derives one from
    /// `main_system` (lowercased, spaces → underscores).
    pub fn tool_id(&self) -> String {
        match self {
            ToolDescriptor::Simple(tool) => tool.tool_id.clone(),
            ToolDescriptor::Complex(tool) => tool.derived_id(),
        }
    }

    /// Human-readable name for listings.
    pub fn name(&self) -> String {
        match self {
            ToolDescriptor::Simple(tool) => tool
                .display_name
                .clone()
                .unwrap_or_else(|| tool.tool_id.clone()),
            ToolDescriptor::Complex(tool) => tool
                .main_system
                .clone()
                .unwrap_or_else(|| "Unknown Tool".to_string()),
        }
    }

    /// Category for listings. Complex records always list as "Integration".
    pub fn category(&self) -> String {
        match self {
            ToolDescriptor::Simple(tool) => tool
                .category
                .clone()
                .unwrap_or_else(|| "Other".to_string()),
            ToolDescriptor::Complex(_) => "Integration".to_string(),
        }
    }
}

/// Flat descriptor: id plus display metadata and optional per-input use cases.
#[derive(Debug, Clone, Deserialize)]
pub struct SimpleTool {
    pub tool_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub integration_status: Option<String>,
    /// When present (even if empty), the rendered text gets a
    /// "What you can get from it" section.
    #[serde(default)]
    pub inputs: Option<BTreeMap<String, SimpleInput>>,
}

/// One input of a Simple tool; only its use cases are rendered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimpleInput {
    #[serde(default)]
    pub use_cases: Vec<String>,
}

/// Descriptor for an integrated system made of named sub-systems.
#[derive(Debug, Clone, Deserialize)]
pub struct ComplexTool {
    #[serde(default)]
    pub main_system: Option<String>,
    /// Rendered as `{score}/10`; kept as a raw value since catalogs carry
    /// integers, floats, or strings here.
    #[serde(default)]
    pub integration_score: Option<Value>,
    pub sub_systems: BTreeMap<String, SubSystem>,
}

impl ComplexTool {
    /// Id derived from the system name, matching how these records are
    /// referenced from saved test configs ("Apple Home" → "apple_home").
    pub fn derived_id(&self) -> String {
        self.main_system
            .as_deref()
            .unwrap_or("unknown")
            .to_lowercase()
            .replace(' ', "_")
    }
}

/// One sub-system of a Complex tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubSystem {
    #[serde(default)]
    pub system_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub inputs: BTreeMap<String, SubSystemInput>,
}

/// One input of a sub-system. `attributes` is kept loosely typed: values may
/// be scalars or nested mappings, and only string-valued entries count as
/// capabilities.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubSystemInput {
    #[serde(default)]
    pub attributes: Option<Value>,
}

//! # Prompt
//!
//! Formats structured problem and tool context into prompts for AI models.
//!
//! ## Modules
//!
//! - [`descriptor`] – ToolDescriptor (Simple / Complex) and sub-system types
//! - [`render`] – `render_tool_text`: tool descriptors → human-readable text block
//! - [`compose`] – `compose_user_prompt`: template substitution with `{problem}` / `{tools}`
//!
//! ## External interactions
//!
//! - **AI models**: Output is sent to LLM APIs as the user message of a chat request.

mod compose;
mod descriptor;
mod render;

pub use compose::{
    compose_user_prompt, TemplateError, DEFAULT_SYSTEM_PROMPT, DEFAULT_USER_PROMPT,
};
pub use descriptor::{
    ComplexTool, SimpleInput, SimpleTool, SubSystem, SubSystemInput, ToolDescriptor,
};
pub use render::render_tool_text;

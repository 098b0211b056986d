//! # Generator
//!
//! The generation pipeline: renders tool text, composes the user prompt, makes
//! one model call, parses the response into solutions, and accounts cost.
//!
//! ## Modules
//!
//! - [`error`] – `GeneratorError` (Configuration / Template / Upstream)
//! - [`types`] – PromptRequest, Solution, GenerationResult, GenerationMetadata
//! - [`parser`] – tolerant decoding of model output with a degraded fallback
//! - [`cost`] – per-request cost from token counts and per-million prices
//! - [`tracker`] – session-scoped CostTracker accumulator
//! - [`config`] – env-based LabConfig
//! - [`generator`] – the `Generator` orchestrator
//!
//! The [`ModelApi`] trait is the seam between the orchestrator and the remote
//! service, so tests can run against a fake client with no network.

use async_trait::async_trait;

mod config;
mod cost;
mod error;
mod generator;
mod parser;
mod tracker;
mod types;

pub use config::{
    LabConfig, DEFAULT_INPUT_PRICE_PER_MILLION, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_OUTPUT_PRICE_PER_MILLION, DEFAULT_TEMPERATURE,
};
pub use cost::cost_usd;
pub use error::{GeneratorError, Result};
pub use generator::Generator;
pub use model_client::{Completion, CompletionRequest, ModelClient};
pub use parser::parse_solutions;
pub use tracker::CostTracker;
pub use types::{GenerationMetadata, GenerationResult, PromptRequest, Solution};

/// Model invocation interface: one request in, reply text plus usage out.
///
/// Object-safe so the orchestrator can hold `Arc<dyn ModelApi>` and tests can
/// substitute a fake implementation.
#[async_trait]
pub trait ModelApi: Send + Sync {
    /// Performs a single blocking (from the caller's view) model call.
    async fn complete(&self, request: &CompletionRequest) -> anyhow::Result<Completion>;
}

#[async_trait]
impl ModelApi for ModelClient {
    async fn complete(&self, request: &CompletionRequest) -> anyhow::Result<Completion> {
        self.chat_completion(request).await
    }
}

//! Request orchestration: render → compose → model call → parse → cost.

use crate::config::{
    LabConfig, DEFAULT_INPUT_PRICE_PER_MILLION, DEFAULT_OUTPUT_PRICE_PER_MILLION,
};
use crate::cost::cost_usd;
use crate::error::{GeneratorError, Result};
use crate::parser::parse_solutions;
use crate::types::{GenerationMetadata, GenerationResult, PromptRequest};
use crate::ModelApi;
use model_client::CompletionRequest;
use prompt::{compose_user_prompt, render_tool_text};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

/// Sequences one generation end to end over any [`ModelApi`] implementation.
pub struct Generator {
    api: Arc<dyn ModelApi>,
    model: String,
    input_price_per_million: f64,
    output_price_per_million: f64,
}

impl Generator {
    pub fn new(api: Arc<dyn ModelApi>, model: impl Into<String>) -> Self {
        Self {
            api,
            model: model.into(),
            input_price_per_million: DEFAULT_INPUT_PRICE_PER_MILLION,
            output_price_per_million: DEFAULT_OUTPUT_PRICE_PER_MILLION,
        }
    }

    pub fn with_pricing(
        mut self,
        input_price_per_million: f64,
        output_price_per_million: f64,
    ) -> Self {
        self.input_price_per_million = input_price_per_million;
        self.output_price_per_million = output_price_per_million;
        self
    }

    /// Builds a generator with the model and pricing from a [`LabConfig`].
    pub fn from_config(api: Arc<dyn ModelApi>, config: &LabConfig) -> Self {
        Self::new(api, config.model.clone()).with_pricing(
            config.input_price_per_million,
            config.output_price_per_million,
        )
    }

    /// Runs one generation.
    ///
    /// Template problems surface as [`GeneratorError::Template`] before the
    /// model is called; an upstream failure surfaces verbatim as
    /// [`GeneratorError::Upstream`] with no retry. The external call is made
    /// exactly once and timed wall-clock for `latency_ms`. Unparseable model
    /// output is not an error: it comes back as the degraded solution. The
    /// number of returned solutions is not validated here; the caller decides
    /// whether to warn when it is not five.
    #[instrument(skip(self, request), fields(model = %self.model))]
    pub async fn generate(&self, request: &PromptRequest) -> Result<GenerationResult> {
        let tool_text = render_tool_text(&request.tools);
        let user_message = compose_user_prompt(
            &request.problem_text,
            &tool_text,
            request.user_prompt_template.as_deref(),
        )?;

        info!(
            tools = request.tools.len(),
            temperature = request.temperature,
            max_tokens = request.max_tokens,
            "starting generation"
        );

        let completion_request = CompletionRequest {
            model: self.model.clone(),
            system_prompt: request.system_prompt.clone(),
            user_message,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let started = Instant::now();
        let completion = self
            .api
            .complete(&completion_request)
            .await
            .map_err(|err| GeneratorError::Upstream(format!("{:#}", err)))?;
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        let tool_ids: Vec<String> = request.tools.iter().map(|tool| tool.tool_id()).collect();
        let solutions = parse_solutions(&completion.text, &tool_ids);

        let cost_usd = cost_usd(
            completion.input_tokens,
            completion.output_tokens,
            self.input_price_per_million,
            self.output_price_per_million,
        );

        info!(
            solutions = solutions.len(),
            input_tokens = completion.input_tokens,
            output_tokens = completion.output_tokens,
            cost_usd,
            latency_ms,
            "generation complete"
        );

        Ok(GenerationResult {
            solutions,
            metadata: GenerationMetadata {
                tokens: completion.input_tokens + completion.output_tokens,
                input_tokens: completion.input_tokens,
                output_tokens: completion.output_tokens,
                cost_usd,
                latency_ms,
                model: self.model.clone(),
                temperature: request.temperature,
            },
        })
    }
}

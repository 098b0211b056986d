//! # Model API client
//!
//! Thin wrapper around [async-openai] for one-shot chat completion. One request
//! carries `(model, system_prompt, user_message, temperature, max_tokens)`; one
//! response carries the reply text plus input/output token usage. Provides
//! token masking for safe logging.

use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use std::sync::Arc;

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
/// Exposed for tests and for callers who need to log API keys safely.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head_len = 7.min(len);
        let tail_len = 4.min(len.saturating_sub(head_len));
        let head = &token[..head_len];
        let tail = if tail_len > 0 {
            &token[len - tail_len..]
        } else {
            ""
        };
        format!("{}***{}", head, tail)
    }
}

/// Everything a single model invocation needs. Constructed fresh per call.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_message: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Reply text and token usage for one completed request.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Chat completion client. Wraps the async-openai client; optionally holds the
/// API key for masked logging.
#[derive(Clone)]
pub struct ModelClient {
    /// Shared async-openai client used for all API calls.
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    /// API key stored only for logging (masked). None when created via `with_client()`.
    api_key_for_logging: Option<String>,
}

impl ModelClient {
    /// Builds a client using the given API key and default API base URL.
    pub fn new(api_key: String) -> Self {
        let api_key_for_logging = Some(api_key.clone());
        let config = async_openai::config::OpenAIConfig::new().with_api_key(api_key);
        let client = Client::with_config(config);
        Self {
            client: Arc::new(client),
            api_key_for_logging,
        }
    }

    /// Builds a client with a custom base URL (e.g. for proxies or compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let api_key_for_logging = Some(api_key.clone());
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        let client = Client::with_config(config);
        Self {
            client: Arc::new(client),
            api_key_for_logging,
        }
    }

    /// Builds a client from an existing async-openai client (no API key stored for logging).
    pub fn with_client(client: Client<async_openai::config::OpenAIConfig>) -> Self {
        Self {
            client: Arc::new(client),
            api_key_for_logging: None,
        }
    }

    /// Sends one chat completion request and returns the reply with usage.
    ///
    /// Logs masked API key and token usage. Returns the first choice's content
    /// or an error if the response has no choices. When the API omits the
    /// usage block, token counts are reported as zero with a warning.
    pub async fn chat_completion(
        &self,
        request: &CompletionRequest,
    ) -> anyhow::Result<Completion> {
        let masked = self
            .api_key_for_logging
            .as_deref()
            .map(mask_token)
            .unwrap_or_else(|| "***".to_string());

        tracing::info!(
            model = %request.model,
            temperature = request.temperature,
            max_tokens = request.max_tokens,
            api_key = %masked,
            "chat_completion request"
        );

        let api_request = CreateChatCompletionRequestArgs::default()
            .model(&request.model)
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(request.system_prompt.clone())
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(request.user_message.clone())
                    .build()?
                    .into(),
            ])
            .build()?;

        if let Ok(json) = serde_json::to_string_pretty(&api_request) {
            tracing::debug!(request_json = %json, "chat_completion request JSON");
        }

        let response = self.client.chat().create(api_request).await?;

        let (input_tokens, output_tokens) = match response.usage {
            Some(ref usage) => {
                tracing::info!(
                    prompt_tokens = usage.prompt_tokens,
                    completion_tokens = usage.completion_tokens,
                    total_tokens = usage.total_tokens,
                    "chat_completion usage"
                );
                (
                    u64::from(usage.prompt_tokens),
                    u64::from(usage.completion_tokens),
                )
            }
            None => {
                tracing::warn!("chat_completion response carried no usage block");
                (0, 0)
            }
        };

        let Some(choice) = response.choices.first() else {
            anyhow::bail!("No response from model");
        };

        Ok(Completion {
            text: choice.message.content.clone().unwrap_or_default(),
            input_tokens,
            output_tokens,
        })
    }
}

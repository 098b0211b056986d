//! Lab configuration: env-based, with pricing and model defaults.

use crate::error::{GeneratorError, Result};
use std::env;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.8;
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Pricing per million tokens (USD).
pub const DEFAULT_INPUT_PRICE_PER_MILLION: f64 = 3.0;
pub const DEFAULT_OUTPUT_PRICE_PER_MILLION: f64 = 15.0;

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct LabConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: String,
    pub input_price_per_million: f64,
    pub output_price_per_million: f64,
}

impl LabConfig {
    /// Load from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; a missing key is a
    /// [`GeneratorError::Configuration`] so startup fails before any request
    /// can be made. `OPENAI_BASE_URL`, `MODEL`, `INPUT_PRICE_PER_MILLION`,
    /// and `OUTPUT_PRICE_PER_MILLION` are optional with defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GeneratorError::Configuration(
                    "OPENAI_API_KEY not found. Create a .env file with: OPENAI_API_KEY=sk-your-key"
                        .to_string(),
                )
            })?;
        let base_url = env::var("OPENAI_BASE_URL").ok().filter(|url| !url.is_empty());
        let model = env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let input_price_per_million =
            env_f64("INPUT_PRICE_PER_MILLION", DEFAULT_INPUT_PRICE_PER_MILLION);
        let output_price_per_million =
            env_f64("OUTPUT_PRICE_PER_MILLION", DEFAULT_OUTPUT_PRICE_PER_MILLION);

        Ok(Self {
            api_key,
            base_url,
            model,
            input_price_per_million,
            output_price_per_million,
        })
    }
}

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

//! Generation error types.
//!
//! Parse degradation is deliberately absent here: malformed model output is a
//! recorded outcome (see [`crate::parser`]), never a raised error.

use prompt::TemplateError;
use thiserror::Error;

/// Errors that can stop a generation.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Required credential/config missing at startup; nothing was sent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// User-supplied template referenced an undefined placeholder. Detected
    /// before the model call so no spend is wasted.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// The external model call failed (network, auth, quota). Surfaced as-is,
    /// not retried.
    #[error("Model API error: {0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

//! Inference gateway port
//!
//! Defines the interface for sending one composed prompt to an inference
//! provider and receiving its raw text output.

use arcana_domain::{CompositeModelId, SafetySetting};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during an inference call.
///
/// The `Display` text is what the error classifier sees, so variants keep
/// the vendor's own wording (status codes, reason strings) intact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Request cancelled")]
    Cancelled,
}

/// Payload for one inference call.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    pub model: CompositeModelId,
    pub prompt: String,
    /// Attached only when the provider accepts a safety block.
    pub safety_settings: Option<Vec<SafetySetting>>,
    /// Attached only when the provider accepts an output-token cap.
    pub max_output_tokens: Option<u32>,
}

impl InferenceRequest {
    pub fn new(model: CompositeModelId, prompt: impl Into<String>) -> Self {
        Self {
            model,
            prompt: prompt.into(),
            safety_settings: None,
            max_output_tokens: None,
        }
    }

    pub fn with_safety_settings(mut self, settings: Vec<SafetySetting>) -> Self {
        self.safety_settings = Some(settings);
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }
}

/// Gateway for inference calls
///
/// This port defines how the application layer reaches inference providers.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Perform one call and return the provider's text output (possibly blank).
    async fn generate(&self, request: &InferenceRequest) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_keeps_status_and_body() {
        let err = GatewayError::Http {
            status: 429,
            body: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 429: quota exceeded");
    }

    #[test]
    fn test_timeout_display() {
        let err = GatewayError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "Request timed out after 30s");
    }
}

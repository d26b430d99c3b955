//! OpenAI Chat Completions adapter
//!
//! `POST {base}/v1/chat/completions`. The endpoint has no per-request
//! safety block; a `content_filter` finish reason is reported as blocked.

use super::{ProviderAdapter, connection_error, http_error};
use crate::credentials::EnvCredentials;
use arcana_application::{GatewayError, InferenceRequest};
use arcana_domain::Vendor;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

pub struct OpenAiProviderAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiProviderAdapter {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Try to create the adapter from environment credentials.
    ///
    /// Returns `None` when no OpenAI API key is present.
    pub fn try_new(credentials: &EnvCredentials, base_url: &str) -> Option<Self> {
        match credentials.api_key(Vendor::OpenAi) {
            Some(key) => {
                info!(base_url, "OpenAI provider initialized");
                Some(Self::new(key, base_url))
            }
            None => {
                debug!("OpenAI provider not available: no API key");
                None
            }
        }
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiProviderAdapter {
    fn provider_id(&self) -> &str {
        Vendor::OpenAi.provider_id()
    }

    async fn generate(
        &self,
        model_id: &str,
        request: &InferenceRequest,
    ) -> Result<String, GatewayError> {
        let body = ChatCompletionRequest {
            model: model_id,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            max_tokens: request.max_output_tokens,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| connection_error("OpenAI", e))?;

        if !response.status().is_success() {
            return Err(http_error(response).await);
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let Some(choice) = parsed.choices.into_iter().next() else {
            return Ok(String::new());
        };

        if choice.finish_reason.as_deref() == Some("content_filter") {
            return Err(GatewayError::Blocked("finish reason content_filter".to_string()));
        }

        Ok(choice.message.and_then(|m| m.content).unwrap_or_default())
    }
}

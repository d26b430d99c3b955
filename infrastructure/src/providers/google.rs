//! Google Generative Language API adapter
//!
//! `POST {base}/v1beta/models/{model}:generateContent`. Safety settings and
//! an output-token cap are sent when the request carries them.

use super::{ProviderAdapter, connection_error, http_error};
use crate::credentials::EnvCredentials;
use arcana_application::{GatewayError, InferenceRequest};
use arcana_domain::{SafetySetting, Vendor};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Finish reasons that mean the output was withheld by a content filter.
const BLOCKING_FINISH_REASONS: [&str; 4] = ["SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST", "SPII"];

// -- Wire types ----------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    safety_settings: Option<&'a [SafetySetting]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Result<String, GatewayError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GatewayError::Blocked(format!("prompt blocked ({})", reason)));
        }

        let Some(candidate) = self.candidates.into_iter().next() else {
            return Ok(String::new());
        };

        if let Some(reason) = candidate.finish_reason.as_deref()
            && BLOCKING_FINISH_REASONS.contains(&reason)
        {
            return Err(GatewayError::Blocked(format!("finish reason {}", reason)));
        }

        Ok(candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default())
    }
}

// -- Adapter -------------------------------------------------------------------

pub struct GoogleProviderAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleProviderAdapter {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Try to create the adapter from environment credentials.
    ///
    /// Returns `None` when no Google API key is present.
    /// Used for auto-detection during DI assembly.
    pub fn try_new(credentials: &EnvCredentials, base_url: &str) -> Option<Self> {
        match credentials.api_key(Vendor::Google) {
            Some(key) => {
                info!(base_url, "Google provider initialized");
                Some(Self::new(key, base_url))
            }
            None => {
                debug!("Google provider not available: no API key");
                None
            }
        }
    }

    fn endpoint(&self, model_id: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, model_id
        )
    }
}

#[async_trait]
impl ProviderAdapter for GoogleProviderAdapter {
    fn provider_id(&self) -> &str {
        Vendor::Google.provider_id()
    }

    async fn generate(
        &self,
        model_id: &str,
        request: &InferenceRequest,
    ) -> Result<String, GatewayError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            safety_settings: request.safety_settings.as_deref(),
            generation_config: request
                .max_output_tokens
                .map(|max_output_tokens| GenerationConfig { max_output_tokens }),
        };

        let response = self
            .client
            .post(self.endpoint(model_id))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| connection_error("Google", e))?;

        if !response.status().is_success() {
            return Err(http_error(response).await);
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        parsed.into_text()
    }
}

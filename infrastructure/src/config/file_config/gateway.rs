//! HTTP gateway configuration (`[gateway]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// Base URL of the Google Generative Language API.
    pub google_base_url: String,
    /// Base URL of the OpenAI API (can be overridden for compatible servers).
    pub openai_base_url: String,
    /// Output-token cap sent to providers that accept one.
    pub max_output_tokens: Option<u32>,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            google_base_url: "https://generativelanguage.googleapis.com".to_string(),
            openai_base_url: "https://api.openai.com".to_string(),
            max_output_tokens: None,
        }
    }
}

//! Per-provider optional parameter support.
//!
//! A pure lookup: given a provider (or a resolved model), report which
//! optional request fields that vendor's endpoint accepts. No I/O, no state.

use super::vendor::Vendor;
use crate::core::model::ResolvedModel;
use serde::{Deserialize, Serialize};

/// Harm categories covered by the default safety block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

impl HarmCategory {
    pub const ALL: [HarmCategory; 4] = [
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::Harassment,
        HarmCategory::DangerousContent,
    ];
}

/// Minimum severity at which content is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafetyThreshold {
    #[serde(rename = "BLOCK_NONE")]
    BlockNone,
    #[serde(rename = "BLOCK_LOW_AND_ABOVE")]
    BlockLowAndAbove,
    #[serde(rename = "BLOCK_MEDIUM_AND_ABOVE")]
    BlockMediumAndAbove,
    #[serde(rename = "BLOCK_HIGH_AND_ABOVE")]
    BlockHighAndAbove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: SafetyThreshold,
}

impl SafetySetting {
    /// Block medium-and-above severity across all four standard categories.
    pub fn default_block() -> Vec<SafetySetting> {
        HarmCategory::ALL
            .into_iter()
            .map(|category| SafetySetting {
                category,
                threshold: SafetyThreshold::BlockMediumAndAbove,
            })
            .collect()
    }
}

/// Optional request fields a provider endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProviderCapabilities {
    /// Accepts a per-request safety-threshold block.
    pub supports_safety_settings: bool,
    /// Accepts an explicit output-token cap.
    pub supports_max_output_tokens: bool,
}

impl ProviderCapabilities {
    /// Capabilities for a provider id. Unknown providers get nothing optional.
    pub fn for_provider(provider_id: &str) -> Self {
        match Vendor::from_provider_id(provider_id) {
            Some(Vendor::Google) => Self {
                supports_safety_settings: true,
                supports_max_output_tokens: true,
            },
            Some(Vendor::OpenAi) => Self {
                supports_safety_settings: false,
                supports_max_output_tokens: true,
            },
            None => Self::default(),
        }
    }

    pub fn for_model(model: &ResolvedModel) -> Self {
        Self::for_provider(model.provider_id())
    }

    /// The safety block to attach, or `None` when the endpoint rejects it.
    pub fn safety_settings(&self) -> Option<Vec<SafetySetting>> {
        self.supports_safety_settings
            .then(SafetySetting::default_block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_supports_safety_settings() {
        let caps = ProviderCapabilities::for_provider("google");
        assert!(caps.supports_safety_settings);
        let settings = caps.safety_settings().unwrap();
        assert_eq!(settings.len(), 4);
        assert!(
            settings
                .iter()
                .all(|s| s.threshold == SafetyThreshold::BlockMediumAndAbove)
        );
    }

    #[test]
    fn openai_does_not_support_safety_settings() {
        let caps = ProviderCapabilities::for_provider("openai");
        assert!(!caps.supports_safety_settings);
        assert!(caps.safety_settings().is_none());
    }

    #[test]
    fn unknown_provider_gets_conservative_default() {
        assert_eq!(
            ProviderCapabilities::for_provider("vendorA"),
            ProviderCapabilities::default()
        );
    }

    #[test]
    fn lookup_by_model_uses_provider_part() {
        let model = ResolvedModel::new("google", "gemini-2.5-pro", "").unwrap();
        assert!(ProviderCapabilities::for_model(&model).supports_safety_settings);
    }

    #[test]
    fn safety_setting_wire_names() {
        let json = serde_json::to_value(SafetySetting::default_block()).unwrap();
        assert_eq!(json[0]["category"], "HARM_CATEGORY_HATE_SPEECH");
        assert_eq!(json[0]["threshold"], "BLOCK_MEDIUM_AND_ABOVE");
    }
}

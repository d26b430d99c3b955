//! Provider configuration from TOML (`[[providers]]` sections)
//!
//! The same shape is read from a JSON catalogue file, which is why the
//! camelCase spellings (`providerId`, `isActive`, ...) are accepted as aliases.

use arcana_domain::{ModelConfig, ProviderConfig};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// One `[[providers.models]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileModelConfig {
    #[serde(alias = "modelId")]
    pub model_id: String,
    /// Shown to users; the model id is used when blank.
    #[serde(default, alias = "displayName")]
    pub display_name: String,
    #[serde(default = "default_true", alias = "isActive")]
    pub is_active: bool,
}

/// One `[[providers]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileProviderConfig {
    #[serde(alias = "providerId")]
    pub provider_id: String,
    #[serde(default = "default_true", alias = "isActive")]
    pub is_active: bool,
    #[serde(default)]
    pub models: Vec<FileModelConfig>,
}

impl FileProviderConfig {
    pub fn to_provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            provider_id: self.provider_id.trim().to_string(),
            is_active: self.is_active,
            models: self
                .models
                .iter()
                .map(|m| ModelConfig::new(m.model_id.trim(), m.display_name.trim(), m.is_active))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_toml_snake_case() {
        let toml_str = r#"
provider_id = "google"

[[models]]
model_id = "gemini-2.5-flash"
display_name = "Flash"

[[models]]
model_id = "gemini-2.5-pro"
is_active = false
"#;
        let provider: FileProviderConfig = toml::from_str(toml_str).unwrap();
        assert!(provider.is_active);
        assert_eq!(provider.models.len(), 2);
        assert!(provider.models[0].is_active);
        assert!(!provider.models[1].is_active);
        assert_eq!(provider.models[1].display_name, "");
    }

    #[test]
    fn test_deserialize_json_camel_case() {
        let json = r#"{
            "providerId": "vendorA",
            "isActive": true,
            "models": [{ "modelId": "fast-v1", "displayName": "Fast", "isActive": false }]
        }"#;
        let provider: FileProviderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(provider.provider_id, "vendorA");
        assert!(!provider.models[0].is_active);
    }

    #[test]
    fn test_to_provider_config_trims_ids() {
        let provider = FileProviderConfig {
            provider_id: " openai ".to_string(),
            is_active: true,
            models: vec![FileModelConfig {
                model_id: " gpt-4o ".to_string(),
                display_name: "GPT-4o".to_string(),
                is_active: true,
            }],
        };
        let config = provider.to_provider_config();
        assert_eq!(config.provider_id, "openai");
        assert_eq!(config.models[0].model_id, "gpt-4o");
    }
}

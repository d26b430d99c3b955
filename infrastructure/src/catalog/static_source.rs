use crate::config::FileConfig;
use arcana_application::{CatalogError, ProviderCatalogSource};
use arcana_domain::ProviderConfig;
use async_trait::async_trait;

/// Provider collection fixed at startup
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    providers: Vec<ProviderConfig>,
}

impl StaticCatalogSource {
    pub fn new(providers: Vec<ProviderConfig>) -> Self {
        Self { providers }
    }

    pub fn from_config(config: &FileConfig) -> Self {
        Self::new(config.provider_configs())
    }
}

#[async_trait]
impl ProviderCatalogSource for StaticCatalogSource {
    async fn fetch_providers(&self) -> Result<Vec<ProviderConfig>, CatalogError> {
        Ok(self.providers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FileModelConfig, FileProviderConfig};

    #[tokio::test]
    async fn test_from_config_keeps_order() {
        let mut config = FileConfig::default();
        for id in ["openai", "google"] {
            config.providers.push(FileProviderConfig {
                provider_id: id.to_string(),
                is_active: true,
                models: vec![FileModelConfig {
                    model_id: "m".to_string(),
                    display_name: String::new(),
                    is_active: true,
                }],
            });
        }

        let providers = StaticCatalogSource::from_config(&config)
            .fetch_providers()
            .await
            .unwrap();
        let ids: Vec<_> = providers.iter().map(|p| p.provider_id.as_str()).collect();
        assert_eq!(ids, vec!["openai", "google"]);
    }
}

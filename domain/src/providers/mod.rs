//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, JSON, etc.). They are owned by the
//! configuration collaborator and only read by the interpretation core.

pub mod capability;
pub mod catalog;
pub mod vendor;

use crate::core::model::ResolvedModel;

/// One inference provider as supplied by the configuration collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Provider id, the first half of a composite model id (e.g. "google").
    pub provider_id: String,
    /// Inactive providers contribute no models.
    pub is_active: bool,
    /// Models offered by this provider, in display order.
    pub models: Vec<ModelConfig>,
}

impl ProviderConfig {
    pub fn new(provider_id: impl Into<String>, is_active: bool) -> Self {
        Self {
            provider_id: provider_id.into(),
            is_active,
            models: Vec::new(),
        }
    }

    pub fn with_model(mut self, model: ModelConfig) -> Self {
        self.models.push(model);
        self
    }
}

/// One model entry under a [`ProviderConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub model_id: String,
    pub display_name: String,
    pub is_active: bool,
}

impl ModelConfig {
    pub fn new(model_id: impl Into<String>, display_name: impl Into<String>, is_active: bool) -> Self {
        Self {
            model_id: model_id.into(),
            display_name: display_name.into(),
            is_active,
        }
    }
}

/// Flatten a provider collection into the ordered list of usable models.
///
/// Keeps active providers and, within those, active models. Entries whose
/// ids cannot form a well-formed composite id are skipped. Order follows the
/// input: provider order first, then model order within a provider.
pub fn active_models(configs: &[ProviderConfig]) -> Vec<ResolvedModel> {
    configs
        .iter()
        .filter(|provider| provider.is_active)
        .flat_map(|provider| {
            provider
                .models
                .iter()
                .filter(|model| model.is_active)
                .filter_map(move |model| {
                    ResolvedModel::new(
                        provider.provider_id.as_str(),
                        model.model_id.as_str(),
                        model.display_name.as_str(),
                    )
                    .ok()
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_models_are_dropped() {
        let configs = vec![
            ProviderConfig::new("vendorA", true)
                .with_model(ModelConfig::new("fast-v1", "Fast", true))
                .with_model(ModelConfig::new("slow-v1", "Slow", false)),
        ];
        let models = active_models(&configs);
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].composite_id().to_string(), "vendorA/fast-v1");
    }

    #[test]
    fn inactive_providers_contribute_nothing() {
        let configs = vec![
            ProviderConfig::new("vendorA", false)
                .with_model(ModelConfig::new("fast-v1", "Fast", true)),
            ProviderConfig::new("vendorB", true)
                .with_model(ModelConfig::new("b-1", "B One", true)),
        ];
        let models = active_models(&configs);
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].provider_id(), "vendorB");
    }

    #[test]
    fn order_follows_provider_then_model_order() {
        let configs = vec![
            ProviderConfig::new("b", true)
                .with_model(ModelConfig::new("2", "", true))
                .with_model(ModelConfig::new("1", "", true)),
            ProviderConfig::new("a", true).with_model(ModelConfig::new("1", "", true)),
        ];
        let ids: Vec<String> = active_models(&configs)
            .iter()
            .map(|m| m.composite_id().to_string())
            .collect();
        assert_eq!(ids, vec!["b/2", "b/1", "a/1"]);
    }

    #[test]
    fn malformed_ids_are_skipped() {
        let configs = vec![
            ProviderConfig::new("", true).with_model(ModelConfig::new("m", "", true)),
            ProviderConfig::new("ok", true)
                .with_model(ModelConfig::new("", "", true))
                .with_model(ModelConfig::new("m", "", true)),
        ];
        let models = active_models(&configs);
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].composite_id().to_string(), "ok/m");
    }

    #[test]
    fn empty_collection_yields_nothing() {
        assert!(active_models(&[]).is_empty());
    }
}

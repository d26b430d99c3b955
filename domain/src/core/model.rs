//! Resolved model value objects

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stable `"{provider}/{model}"` identifier used to name a resolvable model.
///
/// The provider part never contains `/`; the model part may (some vendors
/// namespace their model ids), so parsing splits on the first `/` only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeModelId {
    provider: String,
    model: String,
}

impl CompositeModelId {
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Result<Self, DomainError> {
        let provider = provider.into();
        let model = model.into();
        let provider_ok = !provider.trim().is_empty() && !provider.contains('/');
        if !provider_ok || model.trim().is_empty() {
            return Err(DomainError::InvalidModelId(format!("{}/{}", provider, model)));
        }
        Ok(Self { provider, model })
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl std::fmt::Display for CompositeModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.provider, self.model)
    }
}

impl std::str::FromStr for CompositeModelId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (provider, model) = s
            .split_once('/')
            .ok_or_else(|| DomainError::InvalidModelId(s.to_string()))?;
        Self::new(provider, model)
    }
}

impl Serialize for CompositeModelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CompositeModelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A usable model, ready to be offered to callers and sent requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedModel {
    composite_id: CompositeModelId,
    display_name: String,
}

impl ResolvedModel {
    pub fn new(
        provider_id: impl Into<String>,
        model_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let composite_id = CompositeModelId::new(provider_id, model_id)?;
        let display_name = display_name.into();
        let display_name = if display_name.trim().is_empty() {
            composite_id.model().to_string()
        } else {
            display_name
        };
        Ok(Self {
            composite_id,
            display_name,
        })
    }

    pub fn composite_id(&self) -> &CompositeModelId {
        &self.composite_id
    }

    pub fn provider_id(&self) -> &str {
        self.composite_id.provider()
    }

    pub fn model_id(&self) -> &str {
        self.composite_id.model()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl std::fmt::Display for ResolvedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.composite_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_id_format() {
        let model = ResolvedModel::new("vendorA", "fast-v1", "Fast").unwrap();
        assert_eq!(model.composite_id().to_string(), "vendorA/fast-v1");
        assert_eq!(model.provider_id(), "vendorA");
        assert_eq!(model.model_id(), "fast-v1");
    }

    #[test]
    fn test_composite_id_parse_splits_on_first_slash() {
        let id: CompositeModelId = "openrouter/meta/llama-3".parse().unwrap();
        assert_eq!(id.provider(), "openrouter");
        assert_eq!(id.model(), "meta/llama-3");
        assert_eq!(id.to_string(), "openrouter/meta/llama-3");
    }

    #[test]
    fn test_composite_id_rejects_malformed() {
        assert!("no-slash".parse::<CompositeModelId>().is_err());
        assert!("/model".parse::<CompositeModelId>().is_err());
        assert!("provider/".parse::<CompositeModelId>().is_err());
        assert!(CompositeModelId::new("a/b", "c").is_err());
    }

    #[test]
    fn test_blank_display_name_falls_back_to_model_id() {
        let model = ResolvedModel::new("google", "gemini-2.5-flash", "  ").unwrap();
        assert_eq!(model.display_name(), "gemini-2.5-flash");
    }

    #[test]
    fn test_resolved_model_serializes_composite_as_string() {
        let model = ResolvedModel::new("google", "gemini-2.5-pro", "Gemini 2.5 Pro").unwrap();
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["composite_id"], "google/gemini-2.5-pro");
        assert_eq!(json["display_name"], "Gemini 2.5 Pro");
    }
}

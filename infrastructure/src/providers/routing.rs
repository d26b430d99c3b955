use super::ProviderAdapter;
use arcana_application::{GatewayError, InferenceGateway, InferenceRequest};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Dispatches each request to the adapter registered for the provider half
/// of its composite model id.
pub struct RoutingGateway {
    providers: HashMap<String, Arc<dyn ProviderAdapter>>,
}

impl RoutingGateway {
    /// Later adapters replace earlier ones serving the same provider id.
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>) -> Self {
        let providers = providers
            .into_iter()
            .map(|p| (p.provider_id().to_lowercase(), p))
            .collect();
        Self { providers }
    }

    /// Registered provider ids, sorted
    pub fn provider_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    fn resolve_provider(&self, provider_id: &str) -> Result<&dyn ProviderAdapter, GatewayError> {
        self.providers
            .get(&provider_id.to_lowercase())
            .map(|p| p.as_ref())
            .ok_or_else(|| {
                GatewayError::ModelNotAvailable(format!(
                    "no adapter for provider '{}'",
                    provider_id
                ))
            })
    }
}

#[async_trait]
impl InferenceGateway for RoutingGateway {
    async fn generate(&self, request: &InferenceRequest) -> Result<String, GatewayError> {
        let adapter = self.resolve_provider(request.model.provider())?;
        debug!(model = %request.model, "Routing inference request");
        adapter.generate(request.model.model(), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_domain::CompositeModelId;

    // -- Mock ProviderAdapter --------------------------------------------------

    struct MockProvider {
        id: &'static str,
    }

    impl MockProvider {
        fn new(id: &'static str) -> Arc<dyn ProviderAdapter> {
            Arc::new(Self { id })
        }
    }

    #[async_trait]
    impl ProviderAdapter for MockProvider {
        fn provider_id(&self) -> &str {
            self.id
        }

        async fn generate(
            &self,
            model_id: &str,
            _request: &InferenceRequest,
        ) -> Result<String, GatewayError> {
            Ok(format!("{}:{}", self.id, model_id))
        }
    }

    // -- Helpers ---------------------------------------------------------------

    fn request(id: &str) -> InferenceRequest {
        let model: CompositeModelId = id.parse().unwrap();
        InferenceRequest::new(model, "prompt")
    }

    // -- Tests -----------------------------------------------------------------

    #[tokio::test]
    async fn test_routes_by_provider_id() {
        let gateway = RoutingGateway::new(vec![MockProvider::new("google"), MockProvider::new("openai")]);

        let out = gateway.generate(&request("openai/gpt-4o")).await.unwrap();
        assert_eq!(out, "openai:gpt-4o");

        let out = gateway.generate(&request("google/gemini-2.5-pro")).await.unwrap();
        assert_eq!(out, "google:gemini-2.5-pro");
    }

    #[tokio::test]
    async fn test_provider_match_is_case_insensitive() {
        let gateway = RoutingGateway::new(vec![MockProvider::new("google")]);
        let out = gateway.generate(&request("Google/gemini-2.5-flash")).await.unwrap();
        assert_eq!(out, "google:gemini-2.5-flash");
    }

    #[tokio::test]
    async fn test_model_part_may_contain_slash() {
        let gateway = RoutingGateway::new(vec![MockProvider::new("openai")]);
        let out = gateway.generate(&request("openai/ft/custom-1")).await.unwrap();
        assert_eq!(out, "openai:ft/custom-1");
    }

    #[tokio::test]
    async fn test_unknown_provider_is_model_not_available() {
        let gateway = RoutingGateway::new(vec![MockProvider::new("google")]);
        let err = gateway.generate(&request("vendorA/fast-v1")).await.unwrap_err();
        assert!(matches!(err, GatewayError::ModelNotAvailable(_)));
    }

    #[test]
    fn test_provider_ids_sorted() {
        let gateway = RoutingGateway::new(vec![MockProvider::new("openai"), MockProvider::new("google")]);
        assert_eq!(gateway.provider_ids(), vec!["google", "openai"]);
        assert!(!gateway.is_empty());
        assert!(RoutingGateway::new(Vec::new()).is_empty());
    }
}

//! Inference provider adapters
//!
//! Each adapter speaks one vendor's HTTP API. The [`RoutingGateway`]
//! dispatches a request to the adapter registered for its provider id.

pub mod google;
pub mod openai;
pub mod routing;

pub use google::GoogleProviderAdapter;
pub use openai::OpenAiProviderAdapter;
pub use routing::RoutingGateway;

use arcana_application::{GatewayError, InferenceRequest};
use async_trait::async_trait;

#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Provider id this adapter serves (the first half of a composite id)
    fn provider_id(&self) -> &str;

    /// Send one prompt to `model_id` and return the text output.
    async fn generate(
        &self,
        model_id: &str,
        request: &InferenceRequest,
    ) -> Result<String, GatewayError>;
}

/// Map a transport failure, keeping timeouts distinguishable in the text.
pub(crate) fn connection_error(provider: &str, err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::ConnectionError(format!("{} request timed out: {}", provider, err))
    } else {
        GatewayError::ConnectionError(format!("{} request failed: {}", provider, err))
    }
}

/// Turn a non-2xx response into [`GatewayError::Http`], keeping the body text.
pub(crate) async fn http_error(response: reqwest::Response) -> GatewayError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    GatewayError::Http {
        status,
        body: body.trim().to_string(),
    }
}

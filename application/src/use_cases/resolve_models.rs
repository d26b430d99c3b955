//! Resolve Models use case.
//!
//! Turns the provider configuration into the ordered list of models a
//! request may use. The list is never empty:
//!
//! 1. Active entries of the configuration, in configuration order
//! 2. Otherwise, default models of every vendor with credentials present
//! 3. Otherwise, a placeholder list
//!
//! A failed configuration fetch degrades to steps 2-3 and is reported on the
//! catalogue through [`ModelCatalog::fetch_error`], never as a hard error.
//! Only non-degraded results from a successful fetch are cached.

use crate::cache::TtlCache;
use crate::config::behavior::DEFAULT_CATALOG_TTL;
use crate::ports::provider_catalog::{CredentialPresence, ProviderCatalogSource};
use arcana_domain::{
    CatalogSource, ModelCatalog, active_models, credential_fallback_models, placeholder_models,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Cache key under which the resolved catalogue is stored
pub const CATALOG_CACHE_KEY: &str = "models:catalog";

/// Use case for resolving the model catalogue
pub struct ResolveModelsUseCase {
    source: Arc<dyn ProviderCatalogSource>,
    credentials: Arc<dyn CredentialPresence>,
    cache: TtlCache<ModelCatalog>,
    ttl: Duration,
}

impl Clone for ResolveModelsUseCase {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            credentials: self.credentials.clone(),
            cache: self.cache.clone(),
            ttl: self.ttl,
        }
    }
}

impl ResolveModelsUseCase {
    pub fn new(
        source: Arc<dyn ProviderCatalogSource>,
        credentials: Arc<dyn CredentialPresence>,
        cache: TtlCache<ModelCatalog>,
    ) -> Self {
        Self {
            source,
            credentials,
            cache,
            ttl: DEFAULT_CATALOG_TTL,
        }
    }

    /// Set how long a resolved catalogue stays cached.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Resolve the catalogue, serving it from the cache when possible.
    pub async fn execute(&self) -> ModelCatalog {
        let result = self
            .cache
            .memoize(CATALOG_CACHE_KEY, || self.resolve(), Some(self.ttl))
            .await;

        // A degraded catalogue comes back through the error side so that
        // memoize leaves it out of the cache.
        match result {
            Ok(catalog) | Err(catalog) => catalog,
        }
    }

    /// Drop the cached catalogue so the next call refetches configuration.
    pub fn invalidate(&self) {
        if self.cache.delete(CATALOG_CACHE_KEY) {
            debug!("Model catalogue cache invalidated");
        }
    }

    /// Uncached resolution. `Err` carries a catalogue degraded by a fetch failure.
    async fn resolve(&self) -> Result<ModelCatalog, ModelCatalog> {
        let providers = match self.source.fetch_providers().await {
            Ok(providers) => providers,
            Err(e) => {
                warn!(error = %e, "Provider configuration fetch failed, using fallback models");
                return Err(self.fallback(Some(e.to_string())));
            }
        };

        let models = active_models(&providers);
        if models.is_empty() {
            debug!(
                providers = providers.len(),
                "No active model configured, using fallback models"
            );
            return Ok(self.fallback(None));
        }

        info!(models = models.len(), "Resolved configured models");
        Ok(ModelCatalog {
            models,
            source: CatalogSource::Configured,
            fetch_error: None,
        })
    }

    fn fallback(&self, fetch_error: Option<String>) -> ModelCatalog {
        let models = credential_fallback_models(|vendor| self.credentials.has_credentials(vendor));
        if !models.is_empty() {
            return ModelCatalog {
                models,
                source: CatalogSource::CredentialFallback,
                fetch_error,
            };
        }

        warn!("No provider credentials found, offering placeholder models");
        ModelCatalog {
            models: placeholder_models(),
            source: CatalogSource::Placeholder,
            fetch_error,
        }
    }
}

//! Provider catalogue ports
//!
//! The configuration collaborator supplies the provider collection and a
//! boolean-only credential presence signal. Secret values never cross
//! these ports.

use arcana_domain::{ProviderConfig, Vendor};
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while fetching provider configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Provider configuration unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed provider configuration: {0}")]
    Malformed(String),
}

/// Source of the provider configuration collection.
#[async_trait]
pub trait ProviderCatalogSource: Send + Sync {
    /// Fetch all providers. An empty collection is a legitimate answer.
    async fn fetch_providers(&self) -> Result<Vec<ProviderConfig>, CatalogError>;
}

/// Reports whether credentials for a vendor are present.
pub trait CredentialPresence: Send + Sync {
    fn has_credentials(&self, vendor: Vendor) -> bool;
}

/// Presence signal backed by a fixed answer per vendor (tests, `--no-config`).
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    present: Vec<Vendor>,
}

impl StaticCredentials {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, vendor: Vendor) -> Self {
        if !self.present.contains(&vendor) {
            self.present.push(vendor);
        }
        self
    }
}

impl CredentialPresence for StaticCredentials {
    fn has_credentials(&self, vendor: Vendor) -> bool {
        self.present.contains(&vendor)
    }
}

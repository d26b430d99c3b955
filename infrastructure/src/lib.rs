//! Infrastructure layer for arcana
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod credentials;
pub mod providers;

// Re-export commonly used types
pub use catalog::{JsonFileCatalogSource, StaticCatalogSource};
pub use config::{
    ConfigError, ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, Severity,
};
pub use credentials::EnvCredentials;
pub use providers::{
    GoogleProviderAdapter, OpenAiProviderAdapter, ProviderAdapter, RoutingGateway,
};

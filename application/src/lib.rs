//! Application layer for arcana
//!
//! This crate contains use cases, port definitions, the TTL cache and
//! application configuration. It depends only on the domain layer.

pub mod cache;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use cache::TtlCache;
pub use config::BehaviorConfig;
pub use ports::{
    inference_gateway::{GatewayError, InferenceGateway, InferenceRequest},
    progress::{NoProgress, ProgressNotifier},
    provider_catalog::{CatalogError, CredentialPresence, ProviderCatalogSource, StaticCredentials},
};
pub use use_cases::interpret::{
    InterpretInput, InterpretOutput, InterpretUseCase, Interpretation,
};
pub use use_cases::resolve_models::{CATALOG_CACHE_KEY, ResolveModelsUseCase};

//! Domain layer for arcana
//!
//! This crate contains the pure rules of the interpretation core. It has no
//! dependencies on infrastructure, async runtimes or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Model resolution
//!
//! Provider configuration is flattened into [`ResolvedModel`]s named by a
//! composite `provider/model` id. When configuration yields nothing, the
//! [`Vendor`] table supplies a credential-driven fallback so the resulting
//! [`ModelCatalog`] is never empty.
//!
//! ## Prompt composition
//!
//! A [`PromptComposer`] maps an optional spread id and a card count to a
//! [`PromptRule`] (`Known`, `Inferred` or `Fallback`) and wraps the rule
//! fragment in fixed boilerplate.
//!
//! ## Failure classification
//!
//! An [`ErrorClassifier`] maps raw vendor failure text to an [`ErrorKind`]
//! with a localized message.

pub mod core;
pub mod failure;
pub mod prompt;
pub mod providers;
pub mod util;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    locale::Locale,
    model::{CompositeModelId, ResolvedModel},
};
pub use failure::{
    ClassificationRule, ClassifiedError, ErrorClassifier, ErrorKind, no_content_message,
};
pub use prompt::{
    Clarification, ComposedPrompt, PromptComposer, PromptContext, PromptRule, Spread,
};
pub use providers::{
    ModelConfig, ProviderConfig, active_models,
    capability::{HarmCategory, ProviderCapabilities, SafetySetting, SafetyThreshold},
    catalog::{CatalogSource, ModelCatalog},
    vendor::{Vendor, credential_fallback_models, placeholder_models},
};

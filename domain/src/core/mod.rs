//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ResolvedModel`]: a usable `(provider, model)` pair
//! - [`locale::Locale`]: language of prompts and user-facing messages
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod locale;
pub mod model;

//! Use cases
//!
//! - [`resolve_models`]: provider configuration to a never-empty model catalogue
//! - [`interpret`]: one end-to-end reading request

pub mod interpret;
pub mod resolve_models;

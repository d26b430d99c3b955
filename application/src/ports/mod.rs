//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod inference_gateway;
pub mod progress;
pub mod provider_catalog;

//! Application-level configuration.
//!
//! Types here control how use cases behave at runtime. They are filled in
//! by the infrastructure config loader and carry no file format concerns.

pub mod behavior;

pub use behavior::BehaviorConfig;

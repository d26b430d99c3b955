//! Failure taxonomy
//!
//! Maps opaque vendor failure text into a small, stable set of kinds with
//! localized, ready-to-display messages.

pub mod classifier;

pub use classifier::{
    ClassificationRule, ClassifiedError, ErrorClassifier, ErrorKind, no_content_message,
};

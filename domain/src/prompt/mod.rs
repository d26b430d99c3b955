//! Prompt domain
//!
//! Spreads, the per-request prompt context, and the composer that turns a
//! structural id plus a card count into the final instruction text.

pub mod composer;
pub mod context;
pub mod spread;
mod template;

pub use composer::{ComposedPrompt, PromptComposer, PromptRule};
pub use context::{Clarification, PromptContext};
pub use spread::Spread;
pub use template::{CARDS_PLACEHOLDER, CONTEXT_PLACEHOLDER, PromptTemplate, QUESTION_PLACEHOLDER};

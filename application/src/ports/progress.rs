//! Progress notification port
//!
//! Defines the interface for reporting progress during an interpretation.

use arcana_domain::{PromptRule, ResolvedModel};

/// Callback for progress updates during an interpretation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain log lines, ...).
pub trait ProgressNotifier: Send + Sync {
    /// Called once the model for the request has been chosen
    fn on_model_selected(&self, model: &ResolvedModel);

    /// Called when the provider request is sent
    fn on_request_start(&self, _rule: &PromptRule) {}

    /// Called when the provider request finishes, successfully or not
    fn on_request_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_model_selected(&self, _model: &ResolvedModel) {}
    fn on_request_complete(&self, _success: bool) {}
}

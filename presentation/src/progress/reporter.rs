//! Progress reporting for a reading request

use arcana_application::ProgressNotifier;
use arcana_domain::{PromptRule, ResolvedModel};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner while the provider call is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
    model: Mutex<Option<String>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            model: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_model_selected(&self, model: &ResolvedModel) {
        if let Ok(mut slot) = self.model.lock() {
            *slot = Some(model.display_name().to_string());
        }
    }

    fn on_request_start(&self, _rule: &PromptRule) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(
            self.model
                .lock()
                .ok()
                .and_then(|m| m.clone())
                .unwrap_or_default(),
        );
        pb.set_message("Reading the cards...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_request_complete(&self, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut s| s.take()) else {
            return;
        };
        if success {
            pb.finish_with_message(format!("{}", "done".green()));
        } else {
            pb.finish_with_message(format!("{}", "failed".red()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_model_selected(&self, model: &ResolvedModel) {
        eprintln!("{} {}", "->".cyan(), model.composite_id().to_string().bold());
    }

    fn on_request_complete(&self, success: bool) {
        if success {
            eprintln!("  {} done", "v".green());
        } else {
            eprintln!("  {} failed", "x".red());
        }
    }
}

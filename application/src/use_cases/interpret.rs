//! Interpret use case.
//!
//! Runs one reading request end to end:
//!
//! 1. Resolve the model catalogue and pick the requested or recommended model
//! 2. Compose the instruction text and fill in the request context
//! 3. Attach optional request fields the provider accepts
//! 4. Call the provider under a deadline, racing cancellation
//! 5. Map the outcome to an [`Interpretation`]
//!
//! Provider failures never escape as errors. They are classified into a
//! localized message and returned as [`Interpretation::Failed`].

use crate::config::BehaviorConfig;
use crate::ports::inference_gateway::{GatewayError, InferenceGateway, InferenceRequest};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::resolve_models::ResolveModelsUseCase;
use arcana_domain::util::{log_preview, truncate_str};
use arcana_domain::{
    CatalogSource, ClassifiedError, CompositeModelId, ErrorClassifier, PromptComposer,
    PromptContext, PromptRule, ProviderCapabilities, ResolvedModel, no_content_message,
};
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Input for the [`InterpretUseCase`].
#[derive(Debug, Clone)]
pub struct InterpretInput {
    pub context: PromptContext,
    /// Composite id the caller asked for. Ignored when not in the catalogue.
    pub preferred_model: Option<CompositeModelId>,
    /// Guest requests are subject to the configured guest output limit.
    pub guest: bool,
}

impl InterpretInput {
    pub fn new(context: PromptContext) -> Self {
        Self {
            context,
            preferred_model: None,
            guest: false,
        }
    }

    pub fn with_model(mut self, model: CompositeModelId) -> Self {
        self.preferred_model = Some(model);
        self
    }

    pub fn as_guest(mut self, guest: bool) -> Self {
        self.guest = guest;
        self
    }
}

/// Outcome of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Interpretation {
    /// The provider produced text.
    Success { text: String },
    /// The provider answered with blank output.
    Empty { message: String },
    /// The call failed; the error has been classified.
    Failed(ClassifiedError),
}

impl Interpretation {
    /// The text to show the user, whichever way the request went.
    pub fn message(&self) -> &str {
        match self {
            Interpretation::Success { text } => text,
            Interpretation::Empty { message } => message,
            Interpretation::Failed(error) => &error.user_message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Interpretation::Success { .. })
    }
}

/// Output of the [`InterpretUseCase`].
#[derive(Debug, Clone)]
pub struct InterpretOutput {
    /// Model the request was sent to. `None` only if no model could be chosen.
    pub model: Option<ResolvedModel>,
    pub catalog_source: CatalogSource,
    pub rule: PromptRule,
    pub interpretation: Interpretation,
}

/// Use case for producing one interpretation
pub struct InterpretUseCase {
    resolver: ResolveModelsUseCase,
    gateway: Arc<dyn InferenceGateway>,
    classifier: ErrorClassifier,
    behavior: BehaviorConfig,
    cancellation_token: Option<CancellationToken>,
}

impl Clone for InterpretUseCase {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            gateway: self.gateway.clone(),
            classifier: self.classifier.clone(),
            behavior: self.behavior.clone(),
            cancellation_token: self.cancellation_token.clone(),
        }
    }
}

impl InterpretUseCase {
    pub fn new(
        resolver: ResolveModelsUseCase,
        gateway: Arc<dyn InferenceGateway>,
        behavior: BehaviorConfig,
    ) -> Self {
        Self {
            resolver,
            gateway,
            classifier: ErrorClassifier::new(behavior.locale),
            behavior,
            cancellation_token: None,
        }
    }

    /// Replace the failure classifier (e.g. one extended with vendor markers).
    pub fn with_classifier(mut self, classifier: ErrorClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub async fn execute(&self, input: InterpretInput) -> InterpretOutput {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the request with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        input: InterpretInput,
        progress: &dyn ProgressNotifier,
    ) -> InterpretOutput {
        let context = &input.context;
        let composer = PromptComposer::new(self.behavior.locale);
        let composed = composer.compose(context.spread_id.as_deref(), context.card_count);

        if composed.rule.count_mismatch(context.card_count) {
            warn!(
                spread = context.spread_id.as_deref().unwrap_or_default(),
                cards = context.card_count,
                "Spread id disagrees with card count, keeping the named spread"
            );
        }

        let catalog = self.resolver.execute().await;
        let Some(model) = catalog.select(input.preferred_model.as_ref()).cloned() else {
            let error = self.classifier.classify("no model available");
            return InterpretOutput {
                model: None,
                catalog_source: catalog.source,
                rule: composed.rule,
                interpretation: Interpretation::Failed(error),
            };
        };

        if let Some(requested) = &input.preferred_model
            && requested != model.composite_id()
        {
            warn!(
                requested = %requested,
                using = %model.composite_id(),
                "Requested model not available, using recommended model"
            );
        }
        progress.on_model_selected(&model);

        let request = self.build_request(&model, context.render(&composed.template));

        info!(
            model = %model.composite_id(),
            source = %catalog.source,
            rule = ?composed.rule,
            question = %log_preview(&context.question, 60),
            "Requesting interpretation"
        );
        progress.on_request_start(&composed.rule);

        let interpretation = match self
            .call_gateway(&request)
            .await
            .map(|text| self.apply_guest_limit(text, input.guest))
        {
            Ok(text) if text.trim().is_empty() => {
                warn!(model = %model.composite_id(), "Provider returned no content");
                Interpretation::Empty {
                    message: no_content_message(self.behavior.locale).to_string(),
                }
            }
            Ok(text) => {
                info!(
                    model = %model.composite_id(),
                    bytes = text.len(),
                    "Interpretation complete"
                );
                Interpretation::Success { text }
            }
            Err(e) => {
                let classified = self.classifier.classify(&e.to_string());
                warn!(
                    model = %model.composite_id(),
                    kind = %classified.kind,
                    error = %e,
                    "Interpretation failed"
                );
                Interpretation::Failed(classified)
            }
        };

        progress.on_request_complete(interpretation.is_success());

        InterpretOutput {
            model: Some(model),
            catalog_source: catalog.source,
            rule: composed.rule,
            interpretation,
        }
    }

    fn build_request(&self, model: &ResolvedModel, prompt: String) -> InferenceRequest {
        let capabilities = ProviderCapabilities::for_model(model);
        let mut request = InferenceRequest::new(model.composite_id().clone(), prompt);

        if let Some(settings) = capabilities.safety_settings() {
            request = request.with_safety_settings(settings);
        }
        if capabilities.supports_max_output_tokens
            && let Some(max) = self.behavior.max_output_tokens
        {
            request = request.with_max_output_tokens(max);
        }

        request
    }

    /// One provider call, bounded by the configured deadline and the
    /// cancellation token.
    async fn call_gateway(&self, request: &InferenceRequest) -> Result<String, GatewayError> {
        let timeout = self.behavior.timeout;
        let call = async {
            tokio::time::timeout(timeout, self.gateway.generate(request))
                .await
                .unwrap_or_else(|_| Err(GatewayError::Timeout(timeout)))
        };

        match &self.cancellation_token {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(GatewayError::Cancelled),
                    result = call => result,
                }
            }
            None => call.await,
        }
    }

    fn apply_guest_limit(&self, text: String, guest: bool) -> String {
        match self.behavior.guest_output_limit {
            Some(limit) if guest && text.len() > limit => {
                debug!(limit, original = text.len(), "Truncating guest output");
                truncate_str(&text, limit).trim_end().to_string()
            }
            _ => text,
        }
    }
}

//! Built-in vendors and the credential-based fallback policy.
//!
//! When the provider configuration yields no active model, the catalogue is
//! rebuilt from the vendors below, in [`Vendor::FALLBACK_ORDER`]. That order
//! is part of the public contract: callers may present the first entry as the
//! recommended model, so it must not be reshuffled casually.

use crate::core::model::ResolvedModel;

/// Inference vendors with a hardcoded default model set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Google,
    OpenAi,
}

impl Vendor {
    /// Fallback priority: Google first, then OpenAI.
    pub const FALLBACK_ORDER: [Vendor; 2] = [Vendor::Google, Vendor::OpenAi];

    /// Provider id used in composite model ids
    pub fn provider_id(&self) -> &'static str {
        match self {
            Vendor::Google => "google",
            Vendor::OpenAi => "openai",
        }
    }

    pub fn from_provider_id(provider_id: &str) -> Option<Vendor> {
        Self::FALLBACK_ORDER
            .into_iter()
            .find(|v| v.provider_id().eq_ignore_ascii_case(provider_id))
    }

    /// Environment variables whose presence indicates usable credentials
    pub fn default_credential_vars(&self) -> &'static [&'static str] {
        match self {
            Vendor::Google => &["GEMINI_API_KEY", "GOOGLE_API_KEY"],
            Vendor::OpenAi => &["OPENAI_API_KEY"],
        }
    }

    /// `(model_id, display_name)` pairs offered when falling back to this vendor
    pub fn default_model_specs(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Vendor::Google => &[
                ("gemini-2.5-flash", "Gemini 2.5 Flash"),
                ("gemini-2.5-pro", "Gemini 2.5 Pro"),
            ],
            Vendor::OpenAi => &[("gpt-4o-mini", "GPT-4o mini"), ("gpt-4o", "GPT-4o")],
        }
    }

    pub fn default_models(&self) -> Vec<ResolvedModel> {
        self.default_model_specs()
            .iter()
            .filter_map(|(model, name)| ResolvedModel::new(self.provider_id(), *model, *name).ok())
            .collect()
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.provider_id())
    }
}

/// Default models of every vendor whose credentials are present, in
/// fallback order. Empty when no vendor has credentials.
pub fn credential_fallback_models(has_credentials: impl Fn(Vendor) -> bool) -> Vec<ResolvedModel> {
    Vendor::FALLBACK_ORDER
        .into_iter()
        .filter(|vendor| has_credentials(*vendor))
        .flat_map(|vendor| vendor.default_models())
        .collect()
}

/// Placeholder list offered when no credential is present at all, so that
/// callers never observe an empty model list.
pub fn placeholder_models() -> Vec<ResolvedModel> {
    Vendor::FALLBACK_ORDER[0].default_models()
}

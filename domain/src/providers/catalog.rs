//! The resolved, never-empty model catalogue.

use crate::core::model::{CompositeModelId, ResolvedModel};
use serde::{Deserialize, Serialize};

/// Which branch of the resolution policy produced a catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// Active entries from the provider configuration.
    Configured,
    /// Vendor defaults chosen by credential presence.
    CredentialFallback,
    /// No configuration and no credentials: placeholder defaults.
    Placeholder,
}

impl CatalogSource {
    pub fn is_degraded(&self) -> bool {
        !matches!(self, CatalogSource::Configured)
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CatalogSource::Configured => "configured",
            CatalogSource::CredentialFallback => "credential fallback",
            CatalogSource::Placeholder => "placeholder",
        };
        write!(f, "{}", s)
    }
}

/// Ordered list of usable models plus how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub models: Vec<ResolvedModel>,
    pub source: CatalogSource,
    /// Set when the configuration fetch failed and the catalogue degraded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_error: Option<String>,
}

impl ModelCatalog {
    /// First entry; callers may present it as the recommended model.
    pub fn recommended(&self) -> Option<&ResolvedModel> {
        self.models.first()
    }

    pub fn find(&self, id: &CompositeModelId) -> Option<&ResolvedModel> {
        self.models.iter().find(|m| m.composite_id() == id)
    }

    /// The model named by `preferred` if present, otherwise the recommended one.
    pub fn select(&self, preferred: Option<&CompositeModelId>) -> Option<&ResolvedModel> {
        preferred
            .and_then(|id| self.find(id))
            .or_else(|| self.recommended())
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

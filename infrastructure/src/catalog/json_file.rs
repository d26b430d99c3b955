use crate::config::FileProviderConfig;
use arcana_application::{CatalogError, ProviderCatalogSource};
use arcana_domain::ProviderConfig;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Provider collection read from a JSON array on every fetch
///
/// Fetches are cheap to repeat because the model resolver caches results.
#[derive(Debug, Clone)]
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProviderCatalogSource for JsonFileCatalogSource {
    async fn fetch_providers(&self) -> Result<Vec<ProviderConfig>, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let entries: Vec<FileProviderConfig> = serde_json::from_str(&content).map_err(|e| {
            CatalogError::Malformed(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), providers = entries.len(), "Loaded provider catalogue file");
        Ok(entries
            .iter()
            .map(FileProviderConfig::to_provider_config)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_camel_case_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("providers.json");
        std::fs::write(
            &path,
            r#"[{"providerId":"vendorA","isActive":true,"models":[
                {"modelId":"fast-v1","displayName":"Fast","isActive":true},
                {"modelId":"slow-v1","displayName":"Slow","isActive":false}]}]"#,
        )
        .unwrap();

        let providers = JsonFileCatalogSource::new(&path).fetch_providers().await.unwrap();
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].models.len(), 2);
        assert!(!providers[0].models[1].is_active);
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileCatalogSource::new(dir.path().join("absent.json"))
            .fetch_providers()
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("providers.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileCatalogSource::new(&path).fetch_providers().await.unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }
}

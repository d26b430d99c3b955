//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain and application
//! types at the edges.

mod behavior;
mod cache;
mod credentials;
mod gateway;
mod providers;

pub use behavior::FileBehaviorConfig;
pub use cache::FileCacheConfig;
pub use credentials::FileCredentialsConfig;
pub use gateway::FileGatewayConfig;
pub use providers::{FileModelConfig, FileProviderConfig};

use crate::config::{ConfigIssue, ConfigIssueCode};
use arcana_application::BehaviorConfig;
use arcana_domain::ProviderConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider collection, in recommendation order
    pub providers: Vec<FileProviderConfig>,
    /// JSON file holding the provider collection. When set, it replaces `providers`.
    pub catalog_file: Option<PathBuf>,
    /// Credential environment variable names
    pub credentials: FileCredentialsConfig,
    /// Cache settings
    pub cache: FileCacheConfig,
    /// Request behavior settings
    pub behavior: FileBehaviorConfig,
    /// HTTP gateway settings
    pub gateway: FileGatewayConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Blank or duplicate provider ids
    /// 2. Blank model ids
    /// 3. Zero cache size, zero timeout and zero guest output limit
    /// 4. Unknown locale
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1-2. Provider collection
        let mut seen = HashSet::new();
        for provider in &self.providers {
            let id = provider.provider_id.trim();
            if id.is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyProviderId,
                    "providers: provider_id cannot be empty",
                ));
                continue;
            }
            if !seen.insert(id.to_lowercase()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicateProviderId {
                        provider_id: id.to_string(),
                    },
                    format!("providers: '{}' is defined more than once", id),
                ));
            }
            for model in &provider.models {
                if model.model_id.trim().is_empty() {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::EmptyModelId {
                            provider_id: id.to_string(),
                        },
                        format!("providers.{}: model_id cannot be empty", id),
                    ));
                }
            }
        }

        // 3. Numeric limits
        if self.cache.max_size == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroCacheSize,
                "cache.max_size is 0, treating it as 1",
            ));
        }
        if self.behavior.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidTimeout,
                "behavior.timeout_seconds cannot be 0",
            ));
        }
        if self.behavior.guest_output_limit == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroGuestOutputLimit,
                "behavior.guest_output_limit cannot be 0; leave it unset for no limit",
            ));
        }

        // 4. Enum parse validation
        issues.extend(self.behavior.parse_locale().1);

        issues
    }

    /// Provider collection from `[[providers]]`.
    pub fn provider_configs(&self) -> Vec<ProviderConfig> {
        self.providers
            .iter()
            .map(FileProviderConfig::to_provider_config)
            .collect()
    }

    /// Build the application behavior settings.
    pub fn to_behavior_config(&self) -> BehaviorConfig {
        let mut behavior = BehaviorConfig::default();
        if self.behavior.timeout_seconds > 0 {
            behavior = behavior.with_timeout(Duration::from_secs(self.behavior.timeout_seconds));
        }

        behavior
            .with_locale(self.behavior.parse_locale().0)
            .with_guest_output_limit(self.behavior.guest_output_limit)
            .with_max_output_tokens(self.gateway.max_output_tokens)
            .with_catalog_ttl(self.cache.ttl())
    }
}

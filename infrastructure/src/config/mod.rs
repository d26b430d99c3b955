//! Configuration file loading for arcana
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ARCANA_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./arcana.toml` or `./.arcana.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/arcana/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    FileBehaviorConfig, FileCacheConfig, FileConfig, FileCredentialsConfig, FileGatewayConfig,
    FileModelConfig, FileProviderConfig,
};
pub use loader::{ConfigError, ConfigLoader};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};

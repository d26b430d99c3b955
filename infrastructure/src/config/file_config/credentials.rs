//! Credential variable names (`[credentials]` section)
//!
//! Only the *names* of environment variables live in the config file.
//! Secret values are never written to or read from it.

use arcana_domain::Vendor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCredentialsConfig {
    /// Variables checked, in order, for a Google API key.
    pub google: Vec<String>,
    /// Variables checked, in order, for an OpenAI API key.
    pub openai: Vec<String>,
}

impl Default for FileCredentialsConfig {
    fn default() -> Self {
        Self {
            google: default_vars(Vendor::Google),
            openai: default_vars(Vendor::OpenAi),
        }
    }
}

impl FileCredentialsConfig {
    pub fn vars_for(&self, vendor: Vendor) -> &[String] {
        match vendor {
            Vendor::Google => &self.google,
            Vendor::OpenAi => &self.openai,
        }
    }
}

fn default_vars(vendor: Vendor) -> Vec<String> {
    vendor
        .default_credential_vars()
        .iter()
        .map(|v| v.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_vendor_table() {
        let config = FileCredentialsConfig::default();
        assert_eq!(config.vars_for(Vendor::Google), ["GEMINI_API_KEY", "GOOGLE_API_KEY"]);
        assert_eq!(config.vars_for(Vendor::OpenAi), ["OPENAI_API_KEY"]);
    }

    #[test]
    fn test_partial_override() {
        let config: FileCredentialsConfig = toml::from_str(r#"openai = ["MY_OPENAI_KEY"]"#).unwrap();
        assert_eq!(config.openai, vec!["MY_OPENAI_KEY"]);
        assert_eq!(config.google.len(), 2);
    }
}

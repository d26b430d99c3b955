//! Credential presence backed by environment variables
//!
//! The presence check is what the model resolver sees. Provider adapters
//! additionally read the key value itself through [`EnvCredentials::api_key`].

use crate::config::FileCredentialsConfig;
use arcana_application::CredentialPresence;
use arcana_domain::Vendor;
use std::sync::Arc;

type Lookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads vendor API keys from the variables named in `[credentials]`
#[derive(Clone)]
pub struct EnvCredentials {
    names: FileCredentialsConfig,
    lookup: Lookup,
}

impl std::fmt::Debug for EnvCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvCredentials")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

impl EnvCredentials {
    /// Look variables up in the process environment.
    pub fn from_config(names: &FileCredentialsConfig) -> Self {
        Self::with_lookup(names, |name| std::env::var(name).ok())
    }

    /// Look variables up through `lookup` instead of the process environment.
    pub fn with_lookup(
        names: &FileCredentialsConfig,
        lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            names: names.clone(),
            lookup: Arc::new(lookup),
        }
    }

    /// First non-blank value among the vendor's configured variables.
    pub fn api_key(&self, vendor: Vendor) -> Option<String> {
        self.names
            .vars_for(vendor)
            .iter()
            .filter_map(|name| (self.lookup)(name.as_str()))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    }
}

impl CredentialPresence for EnvCredentials {
    fn has_credentials(&self, vendor: Vendor) -> bool {
        self.api_key(vendor).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn credentials(vars: &[(&str, &str)]) -> EnvCredentials {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvCredentials::with_lookup(&FileCredentialsConfig::default(), move |name| {
            map.get(name).cloned()
        })
    }

    #[test]
    fn test_second_google_variable_counts() {
        let creds = credentials(&[("GOOGLE_API_KEY", "g-key")]);
        assert!(creds.has_credentials(Vendor::Google));
        assert_eq!(creds.api_key(Vendor::Google).as_deref(), Some("g-key"));
        assert!(!creds.has_credentials(Vendor::OpenAi));
    }

    #[test]
    fn test_blank_value_is_absent() {
        let creds = credentials(&[("OPENAI_API_KEY", "   ")]);
        assert!(!creds.has_credentials(Vendor::OpenAi));
    }

    #[test]
    fn test_first_non_blank_wins() {
        let creds = credentials(&[("GEMINI_API_KEY", ""), ("GOOGLE_API_KEY", "second")]);
        assert_eq!(creds.api_key(Vendor::Google).as_deref(), Some("second"));
    }
}

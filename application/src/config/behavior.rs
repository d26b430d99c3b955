//! Interpretation behavior parameters.

use arcana_domain::Locale;
use std::time::Duration;

/// Default deadline for one inference call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default lifetime of a cached model catalogue
pub const DEFAULT_CATALOG_TTL: Duration = Duration::from_secs(300);

/// Runtime behavior of the interpretation use cases.
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Deadline for one provider call. Every call carries one.
    pub timeout: Duration,
    /// Language of the prompt directive and of every user-facing message.
    pub locale: Locale,
    /// Byte cap applied to guest output. `None` leaves guest output untouched.
    pub guest_output_limit: Option<usize>,
    /// Output-token cap sent to providers that accept one.
    pub max_output_tokens: Option<u32>,
    /// How long a resolved model catalogue stays cached.
    pub catalog_ttl: Duration,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            locale: Locale::default(),
            guest_output_limit: None,
            max_output_tokens: None,
            catalog_ttl: DEFAULT_CATALOG_TTL,
        }
    }
}

impl BehaviorConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_guest_output_limit(mut self, limit: Option<usize>) -> Self {
        self.guest_output_limit = limit;
        self
    }

    pub fn with_max_output_tokens(mut self, max: Option<u32>) -> Self {
        self.max_output_tokens = max;
        self
    }

    pub fn with_catalog_ttl(mut self, ttl: Duration) -> Self {
        self.catalog_ttl = ttl;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BehaviorConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.guest_output_limit, None);
        assert_eq!(config.catalog_ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_with_timeout() {
        let config = BehaviorConfig::default().with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}

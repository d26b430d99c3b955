//! Behavior configuration (`[behavior]` section)

use crate::config::{ConfigIssue, ConfigIssueCode};
use arcana_domain::Locale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Deadline for one provider call, in seconds.
    pub timeout_seconds: u64,
    /// `en` or `ko`.
    pub locale: String,
    /// Byte cap on guest output. Unset means no cap.
    pub guest_output_limit: Option<usize>,
}

impl Default for FileBehaviorConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 60,
            locale: Locale::default().as_str().to_string(),
            guest_output_limit: None,
        }
    }
}

impl FileBehaviorConfig {
    /// Parse the locale, falling back to the default with a warning issue.
    pub fn parse_locale(&self) -> (Locale, Vec<ConfigIssue>) {
        match self.locale.parse::<Locale>() {
            Ok(locale) => (locale, Vec::new()),
            Err(_) => (
                Locale::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "behavior.locale".to_string(),
                        value: self.locale.clone(),
                        valid_values: vec!["en".to_string(), "ko".to_string()],
                    },
                    format!(
                        "behavior.locale: unknown value '{}', falling back to '{}'",
                        self.locale,
                        Locale::default().as_str()
                    ),
                )],
            ),
        }
    }
}

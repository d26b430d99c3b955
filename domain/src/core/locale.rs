//! Locale value object

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Language used for the prompt's language directive and for every
/// user-facing message produced by the interpretation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    Korean,
}

impl Locale {
    /// Short language tag (`en`, `ko`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Korean => "ko",
        }
    }

    /// Name of the language as it should appear in an instruction to the model
    pub fn language_name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Korean => "Korean",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ko" | "korean" => Ok(Locale::Korean),
            other => Err(DomainError::UnknownLocale(other.to_string())),
        }
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("KO".parse::<Locale>().unwrap(), Locale::Korean);
        assert_eq!(" korean ".parse::<Locale>().unwrap(), Locale::Korean);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_default_is_english() {
        assert_eq!(Locale::default(), Locale::English);
    }

    #[test]
    fn test_locale_serde_as_tag() {
        let json = serde_json::to_string(&Locale::Korean).unwrap();
        assert_eq!(json, "\"ko\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::English);
    }
}

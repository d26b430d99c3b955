//! Table-driven classification of vendor failure text.
//!
//! Rules are checked in order and the first rule with a matching marker
//! wins. Supporting a new vendor means adding markers, not control flow.

use crate::core::locale::Locale;
use serde::{Deserialize, Serialize};

/// User-facing failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Quota or rate limit exhausted (HTTP 429 and equivalents).
    RateLimited,
    /// Provider temporarily overloaded (HTTP 503 and equivalents).
    Overloaded,
    /// Rejected by the provider's content-safety filter.
    ContentBlocked,
    /// Anything else.
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::Overloaded => "overloaded",
            ErrorKind::ContentBlocked => "content_blocked",
            ErrorKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub user_message: String,
}

/// One `(markers, kind)` row of the classification table.
///
/// Markers are matched case-insensitively as substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRule {
    pub kind: ErrorKind,
    markers: Vec<String>,
}

impl ClassificationRule {
    pub fn new<I, S>(kind: ErrorKind, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            kind,
            markers: markers
                .into_iter()
                .map(|m| m.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    fn matches(&self, lowered: &str) -> bool {
        self.markers.iter().any(|m| lowered.contains(m.as_str()))
    }
}

/// Ordered, first-match classifier with localized messages.
#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    rules: Vec<ClassificationRule>,
    locale: Locale,
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl ErrorClassifier {
    /// Classifier with the built-in rule table.
    pub fn new(locale: Locale) -> Self {
        Self {
            rules: Self::default_rules(),
            locale,
        }
    }

    pub fn default_rules() -> Vec<ClassificationRule> {
        vec![
            ClassificationRule::new(
                ErrorKind::RateLimited,
                [
                    "429",
                    "rate limit",
                    "rate_limit",
                    "quota",
                    "resource_exhausted",
                    "resource exhausted",
                    "too many requests",
                ],
            ),
            ClassificationRule::new(
                ErrorKind::Overloaded,
                ["503", "529", "overloaded", "service unavailable", "unavailable"],
            ),
            ClassificationRule::new(
                ErrorKind::ContentBlocked,
                [
                    "response blocked",
                    "blocked: safety",
                    "blockreason",
                    "finish reason safety",
                    "content_filter",
                    "content filter",
                    "content policy",
                    "prohibited_content",
                ],
            ),
        ]
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Add vendor markers to the existing rule for `kind`, or append a new
    /// rule when none exists. Rule order is unchanged.
    pub fn with_markers<I, S>(mut self, kind: ErrorKind, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = ClassificationRule::new(kind, markers);
        match self.rules.iter_mut().find(|r| r.kind == kind) {
            Some(rule) => rule.markers.extend(extra.markers),
            None => self.rules.push(extra),
        }
        self
    }

    pub fn kind_of(&self, raw: &str) -> ErrorKind {
        let lowered = raw.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.kind)
            .unwrap_or(ErrorKind::Unknown)
    }

    pub fn classify(&self, raw: &str) -> ClassifiedError {
        let kind = self.kind_of(raw);
        ClassifiedError {
            kind,
            user_message: self.message_for(kind, raw),
        }
    }

    fn message_for(&self, kind: ErrorKind, raw: &str) -> String {
        match (self.locale, kind) {
            (Locale::English, ErrorKind::RateLimited) => {
                "The AI service quota has been used up for now. Please try again later, or contact the site operator if this keeps happening.".to_string()
            }
            (Locale::English, ErrorKind::Overloaded) => {
                "The AI service is temporarily overloaded. Please try again in a moment.".to_string()
            }
            (Locale::English, ErrorKind::ContentBlocked) => {
                "Your request was blocked because it conflicts with the content policy. Please rephrase your question and try again.".to_string()
            }
            (Locale::English, ErrorKind::Unknown) => {
                format!("Sorry, something went wrong while generating your reading: {}", raw.trim())
            }
            (Locale::Korean, ErrorKind::RateLimited) => {
                "AI 서비스 사용 한도를 초과했습니다. 잠시 후 다시 시도하시거나 문제가 계속되면 운영자에게 문의해 주세요.".to_string()
            }
            (Locale::Korean, ErrorKind::Overloaded) => {
                "AI 서비스가 일시적으로 혼잡합니다. 잠시 후 다시 시도해 주세요.".to_string()
            }
            (Locale::Korean, ErrorKind::ContentBlocked) => {
                "요청 내용이 콘텐츠 정책에 위배되어 해석을 생성할 수 없습니다. 질문을 바꾸어 다시 시도해 주세요.".to_string()
            }
            (Locale::Korean, ErrorKind::Unknown) => {
                format!("죄송합니다. 해석을 생성하는 중 오류가 발생했습니다: {}", raw.trim())
            }
        }
    }
}

/// Message shown when the provider answered with blank output.
pub fn no_content_message(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "No interpretation was generated. Please try again.",
        Locale::Korean => "생성된 해석이 없습니다. 다시 시도해 주세요.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(raw: &str) -> ErrorKind {
        ErrorClassifier::default().classify(raw).kind
    }

    #[test]
    fn rate_limit_markers() {
        assert_eq!(kind("429 quota exceeded"), ErrorKind::RateLimited);
        assert_eq!(kind("RESOURCE_EXHAUSTED"), ErrorKind::RateLimited);
        assert_eq!(kind("Too Many Requests"), ErrorKind::RateLimited);
    }

    #[test]
    fn overload_markers() {
        assert_eq!(kind("503 overloaded"), ErrorKind::Overloaded);
        assert_eq!(kind("The model is overloaded"), ErrorKind::Overloaded);
    }

    #[test]
    fn content_blocked_markers() {
        assert_eq!(kind("blocked: SAFETY"), ErrorKind::ContentBlocked);
        assert_eq!(kind("finish_reason=content_filter"), ErrorKind::ContentBlocked);
        assert_eq!(
            kind("Response blocked: finish reason SAFETY"),
            ErrorKind::ContentBlocked
        );
        assert_eq!(
            kind(r#"{"promptFeedback":{"blockReason":"OTHER"}}"#),
            ErrorKind::ContentBlocked
        );
    }

    #[test]
    fn safety_settings_request_error_is_not_content_blocked() {
        let raw = r#"HTTP 400: {"error":{"code":400,"message":"Invalid value at 'safety_settings[0].category'","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(kind(raw), ErrorKind::Unknown);
        assert_eq!(kind("request blocked by proxy"), ErrorKind::Unknown);
    }

    #[test]
    fn unmatched_is_unknown_with_detail() {
        let classified = ErrorClassifier::default().classify("connection reset");
        assert_eq!(classified.kind, ErrorKind::Unknown);
        assert!(classified.user_message.starts_with("Sorry"));
        assert!(classified.user_message.ends_with("connection reset"));
    }

    #[test]
    fn first_match_wins() {
        // Both a quota marker and a safety marker: rate limit is earlier in the table.
        assert_eq!(kind("quota: response blocked"), ErrorKind::RateLimited);
    }

    #[test]
    fn vendor_markers_extend_existing_rule() {
        let classifier = ErrorClassifier::default().with_markers(ErrorKind::Overloaded, ["Capacity Exceeded"]);
        assert_eq!(classifier.classify("capacity exceeded, retry").kind, ErrorKind::Overloaded);
        assert_eq!(classifier.kind_of("connection reset"), ErrorKind::Unknown);
    }

    #[test]
    fn korean_messages() {
        let classifier = ErrorClassifier::new(Locale::Korean);
        let classified = classifier.classify("503");
        assert_eq!(classified.kind, ErrorKind::Overloaded);
        assert!(classified.user_message.contains("혼잡"));
        assert!(no_content_message(Locale::Korean).contains("해석"));
    }

    #[test]
    fn messages_are_never_empty() {
        let classifier = ErrorClassifier::default();
        for raw in ["429", "503", "safety", "", "boom"] {
            assert!(!classifier.classify(raw).user_message.is_empty());
        }
    }
}

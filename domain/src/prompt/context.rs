//! Per-request prompt context and placeholder substitution.

use super::template::{CARDS_PLACEHOLDER, CONTEXT_PLACEHOLDER, QUESTION_PLACEHOLDER};
use crate::core::error::DomainError;

/// A follow-up question the querent already answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clarification {
    pub question: String,
    pub answer: String,
}

impl Clarification {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl std::str::FromStr for Clarification {
    type Err = DomainError;

    /// Parses `QUESTION=ANSWER`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((q, a)) if !q.trim().is_empty() && !a.trim().is_empty() => {
                Ok(Self::new(q.trim(), a.trim()))
            }
            _ => Err(DomainError::InvalidClarification(s.to_string())),
        }
    }
}

/// Everything the composed template needs, built fresh for each request
/// and dropped once the instruction text has been rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptContext {
    pub spread_id: Option<String>,
    pub card_count: usize,
    pub question: String,
    pub clarifications: Vec<Clarification>,
    pub extra: Option<String>,
    /// Free-text description of the querent (age range, situation, ...).
    pub profile: Option<String>,
    pub card_descriptors: Vec<String>,
}

impl PromptContext {
    /// Context for `question` over `cards`; the card count follows the cards.
    pub fn new(question: impl Into<String>, cards: Vec<String>) -> Self {
        Self {
            card_count: cards.len(),
            question: question.into(),
            card_descriptors: cards,
            ..Default::default()
        }
    }

    pub fn with_spread(mut self, spread_id: impl Into<String>) -> Self {
        self.spread_id = Some(spread_id.into());
        self
    }

    pub fn with_clarification(mut self, clarification: Clarification) -> Self {
        self.clarifications.push(clarification);
        self
    }

    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Substitute the question, context and card placeholders of a composed template.
    ///
    /// Runs in one pass over `template`: substituted values are never
    /// rescanned, so user text that looks like a placeholder stays verbatim.
    pub fn render(&self, template: &str) -> String {
        let context = self.context_block();
        let cards = self.cards_block();
        let values = [
            (QUESTION_PLACEHOLDER, self.question.trim()),
            (CONTEXT_PLACEHOLDER, context.as_str()),
            (CARDS_PLACEHOLDER, cards.as_str()),
        ];

        let mut out = String::with_capacity(template.len() + context.len() + cards.len());
        let mut rest = template;
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            match values.iter().find(|(token, _)| tail.starts_with(token)) {
                Some((token, value)) => {
                    out.push_str(value);
                    rest = &tail[token.len()..];
                }
                None => {
                    out.push_str("{{");
                    rest = &tail[2..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    fn context_block(&self) -> String {
        let mut lines = Vec::new();

        for c in &self.clarifications {
            lines.push(format!("Q: {}", c.question.trim()));
            lines.push(format!("A: {}", c.answer.trim()));
        }

        if let Some(extra) = non_blank(self.extra.as_deref()) {
            lines.push(format!("Additional notes: {}", extra));
        }

        if let Some(profile) = non_blank(self.profile.as_deref()) {
            lines.push(format!("About the querent: {}", profile));
        }

        if lines.is_empty() {
            "(none)".to_string()
        } else {
            lines.join("\n")
        }
    }

    fn cards_block(&self) -> String {
        self.card_descriptors
            .iter()
            .enumerate()
            .map(|(i, card)| format!("{}. {}", i + 1, card.trim()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "Q={{question}}\nC={{context}}\nK={{cards}}";

    #[test]
    fn card_count_follows_cards() {
        let ctx = PromptContext::new("q", vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(ctx.card_count, 3);
    }

    #[test]
    fn render_substitutes_all_placeholders() {
        let ctx = PromptContext::new(
            "Will the move go well?",
            vec!["The Fool (upright)".into(), "The Tower (reversed)".into()],
        )
        .with_clarification(Clarification::new("When?", "Next spring"))
        .with_extra("Moving abroad")
        .with_profile("thirties, first move");

        let rendered = ctx.render(TEMPLATE);
        assert!(rendered.contains("Q=Will the move go well?"));
        assert!(rendered.contains("Q: When?\nA: Next spring"));
        assert!(rendered.contains("Additional notes: Moving abroad"));
        assert!(rendered.contains("About the querent: thirties, first move"));
        assert!(rendered.contains("1. The Fool (upright)\n2. The Tower (reversed)"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn render_leaves_placeholder_text_in_values_alone() {
        let ctx = PromptContext::new(
            "What about {{cards}} and {{context}}?",
            vec!["The Fool {{question}}".into()],
        )
        .with_extra("see {{cards}}");

        let rendered = ctx.render(TEMPLATE);
        assert!(rendered.contains("Q=What about {{cards}} and {{context}}?"));
        assert!(rendered.contains("C=Additional notes: see {{cards}}"));
        assert!(rendered.contains("K=1. The Fool {{question}}"));
    }

    #[test]
    fn render_keeps_unknown_braces() {
        let ctx = PromptContext::new("q", vec!["x".into()]);
        assert_eq!(ctx.render("{{other}} {{question}}"), "{{other}} q");
    }

    #[test]
    fn empty_context_renders_none_marker() {
        let ctx = PromptContext::new("q", vec!["x".into()]).with_extra("   ");
        assert!(ctx.render(TEMPLATE).contains("C=(none)"));
    }

    #[test]
    fn clarification_parse() {
        let c: Clarification = "How long? = Two years".parse().unwrap();
        assert_eq!(c, Clarification::new("How long?", "Two years"));
        assert!("no separator".parse::<Clarification>().is_err());
        assert!("=answer".parse::<Clarification>().is_err());
    }
}

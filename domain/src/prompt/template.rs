//! Prompt templates for a reading request

use super::spread::Spread;
use crate::core::locale::Locale;

pub const QUESTION_PLACEHOLDER: &str = "{{question}}";
pub const CONTEXT_PLACEHOLDER: &str = "{{context}}";
pub const CARDS_PLACEHOLDER: &str = "{{cards}}";

/// Fixed boilerplate and rule fragments the composer stitches together
pub struct PromptTemplate;

impl PromptTemplate {
    /// Persona statement opening every instruction
    pub fn persona() -> &'static str {
        r#"You are an experienced tarot reader who offers thoughtful, grounded interpretations.
You read the cards you are given and relate them to the querent's question with care."#
    }

    /// Language and tone directive
    pub fn language_directive(locale: Locale) -> String {
        format!(
            r#"Write your entire answer in {}.
Keep a warm and respectful tone. Offer perspective rather than certainty, and never present the reading as medical, legal or financial advice."#,
            locale.language_name()
        )
    }

    /// Rules for a recognised spread. Mentions only this spread.
    pub fn spread_rules(spread: Spread) -> String {
        let count = spread.card_count();
        let mut rules = format!(
            "## Reading Structure: {}\n\nThis reading has exactly {} {}, one for each named position:\n",
            spread.display_name(),
            count,
            card_noun(count)
        );

        for (i, position) in spread.positions().iter().enumerate() {
            rules.push_str(&format!(
                "{}. {}: interpret card {} in the light of \"{}\".\n",
                i + 1,
                position,
                i + 1,
                position
            ));
        }

        rules.push_str(&format!(
            r#"
Rules:
- Interpret exactly {} {}, in the order given, each in its named position.
- Do not mention, suggest or compare against any other layout or card count.
- Never invent cards that were not drawn.
- Close with a short synthesis that ties the positions together."#,
            count,
            card_noun(count)
        ));

        rules
    }

    /// Generic rules used when no structure applies
    pub fn fallback_rules(card_count: usize) -> String {
        format!(
            r#"## Reading Structure

Rules:
- The querent drew exactly {} {}. Interpret exactly that many, in the order given.
- Never invent cards that were not drawn, and never drop any that were.
- Do not refer to any named layout or to any other card count.
- Close with a short synthesis of the cards as a whole."#,
            card_count,
            card_noun(card_count)
        )
    }

    /// Embed a rule fragment in the fixed boilerplate.
    ///
    /// The result still carries the question, context and card placeholders;
    /// filling them is the caller's job.
    pub fn wrap(rules: &str, locale: Locale) -> String {
        format!(
            r#"{persona}
{language}

{rules}

## Question
{question}

## Context
{context}

## Cards
{cards}"#,
            persona = Self::persona(),
            language = Self::language_directive(locale),
            rules = rules,
            question = QUESTION_PLACEHOLDER,
            context = CONTEXT_PLACEHOLDER,
            cards = CARDS_PLACEHOLDER,
        )
    }
}

fn card_noun(count: usize) -> &'static str {
    if count == 1 { "card" } else { "cards" }
}

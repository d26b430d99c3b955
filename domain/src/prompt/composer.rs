//! Prompt composition: pick a structural rule set, then wrap it.
//!
//! Selection happens once, into a [`PromptRule`]; every variant renders
//! through the same [`PromptTemplate::wrap`] call.
//!
//! A structural id that disagrees with the actual card count is not
//! corrected here: the id wins. [`PromptRule::count_mismatch`] lets callers
//! observe the disagreement.

use super::spread::Spread;
use super::template::PromptTemplate;
use crate::core::locale::Locale;

/// The rule set chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRule {
    /// The caller named a recognised spread.
    Known(Spread),
    /// No usable id; the spread was inferred from the card count.
    Inferred(Spread),
    /// Neither an id nor a known card count applies.
    Fallback { card_count: usize },
}

impl PromptRule {
    /// Select the rule for an optional structural id and the actual card count.
    ///
    /// Unrecognised ids are ignored and inference from the count applies.
    pub fn select(spread_id: Option<&str>, card_count: usize) -> Self {
        if let Some(id) = spread_id
            && let Ok(spread) = id.parse::<Spread>()
        {
            return PromptRule::Known(spread);
        }

        match Spread::from_card_count(card_count) {
            Some(spread) => PromptRule::Inferred(spread),
            None => PromptRule::Fallback { card_count },
        }
    }

    pub fn spread(&self) -> Option<Spread> {
        match self {
            PromptRule::Known(spread) | PromptRule::Inferred(spread) => Some(*spread),
            PromptRule::Fallback { .. } => None,
        }
    }

    /// True when a caller-named spread expects a different number of cards.
    pub fn count_mismatch(&self, actual: usize) -> bool {
        matches!(self, PromptRule::Known(spread) if spread.card_count() != actual)
    }

    /// The rule fragment for this selection
    pub fn fragment(&self) -> String {
        match self {
            PromptRule::Known(spread) | PromptRule::Inferred(spread) => {
                PromptTemplate::spread_rules(*spread)
            }
            PromptRule::Fallback { card_count } => PromptTemplate::fallback_rules(*card_count),
        }
    }
}

/// Output of [`PromptComposer::compose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub rule: PromptRule,
    /// Instruction text with placeholders still in place.
    pub template: String,
}

/// Builds the instruction text for a reading request.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptComposer {
    locale: Locale,
}

impl PromptComposer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn compose(&self, spread_id: Option<&str>, card_count: usize) -> ComposedPrompt {
        let rule = PromptRule::select(spread_id, card_count);
        ComposedPrompt {
            rule,
            template: PromptTemplate::wrap(&rule.fragment(), self.locale),
        }
    }
}

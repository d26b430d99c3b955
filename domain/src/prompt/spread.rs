//! Spread value object: the named structural templates.

use crate::core::error::DomainError;

/// A fixed card layout with named positions.
///
/// Each spread is tied to exactly one card count; the id (`single`,
/// `triad`, ...) is what callers pass as the structural id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spread {
    Single,
    Triad,
    Pentad,
    Heptad,
    Nonad,
    Decad,
}

impl Spread {
    pub const ALL: [Spread; 6] = [
        Spread::Single,
        Spread::Triad,
        Spread::Pentad,
        Spread::Heptad,
        Spread::Nonad,
        Spread::Decad,
    ];

    /// Structural id as accepted from callers
    pub fn id(&self) -> &'static str {
        match self {
            Spread::Single => "single",
            Spread::Triad => "triad",
            Spread::Pentad => "pentad",
            Spread::Heptad => "heptad",
            Spread::Nonad => "nonad",
            Spread::Decad => "decad",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Spread::Single => "One-Card Draw",
            Spread::Triad => "Past-Present-Future",
            Spread::Pentad => "Five-Card Cross",
            Spread::Heptad => "Horseshoe",
            Spread::Nonad => "Nine-Card Square",
            Spread::Decad => "Celtic Cross",
        }
    }

    /// Named positions, in draw order. Its length is the spread's card count.
    pub fn positions(&self) -> &'static [&'static str] {
        match self {
            Spread::Single => &["Core Message"],
            Spread::Triad => &["Past", "Present", "Future"],
            Spread::Pentad => &[
                "Present Situation",
                "Challenge",
                "Past Influence",
                "Future Influence",
                "Outcome",
            ],
            Spread::Heptad => &[
                "Past",
                "Present",
                "Hidden Influences",
                "Obstacles",
                "External Influences",
                "Advice",
                "Likely Outcome",
            ],
            Spread::Nonad => &[
                "Distant Past",
                "Recent Past",
                "Present",
                "Near Future",
                "Distant Future",
                "Hopes",
                "Fears",
                "Surroundings",
                "Outcome",
            ],
            Spread::Decad => &[
                "Present",
                "Challenge",
                "Foundation",
                "Recent Past",
                "Crowning Goal",
                "Near Future",
                "Self",
                "Environment",
                "Hopes and Fears",
                "Outcome",
            ],
        }
    }

    pub fn card_count(&self) -> usize {
        self.positions().len()
    }

    /// The spread implied by a card count (1, 3, 5, 7, 9, 10), if any.
    pub fn from_card_count(count: usize) -> Option<Spread> {
        Self::ALL.into_iter().find(|s| s.card_count() == count)
    }
}

impl std::fmt::Display for Spread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for Spread {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|spread| spread.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::UnknownSpread(s.to_string()))
    }
}

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the five comparison symbols taught by the trainer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Less,
    LessOrEqual,
    Equal,
    GreaterOrEqual,
    Greater,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown comparison symbol: {raw:?}")]
pub struct ParseSymbolError {
    raw: String,
}

impl Symbol {
    /// Answer-button order, smallest relation first.
    pub const ALL: [Symbol; 5] = [
        Symbol::Less,
        Symbol::LessOrEqual,
        Symbol::Equal,
        Symbol::GreaterOrEqual,
        Symbol::Greater,
    ];

    /// Maps a strict numeric ordering onto `<`, `=` or `>`.
    ///
    /// Never yields `≤` or `≥`; those only come from hand-authored scenarios.
    #[must_use]
    pub fn for_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Symbol::Less,
            Ordering::Equal => Symbol::Equal,
            Ordering::Greater => Symbol::Greater,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Symbol::Less => "<",
            Symbol::LessOrEqual => "≤",
            Symbol::Equal => "=",
            Symbol::GreaterOrEqual => "≥",
            Symbol::Greater => ">",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Less => "Less Than",
            Symbol::LessOrEqual => "Less Than or Equal To",
            Symbol::Equal => "Equal To",
            Symbol::GreaterOrEqual => "Greater Than or Equal To",
            Symbol::Greater => "Greater Than",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Symbol::Less => {
                "Shows that the value on the left is smaller than the value on the right."
            }
            Symbol::LessOrEqual => {
                "Shows that the value on the left is smaller than or equal to the value on the right. \
                 Best used when expressing maximum limits, thresholds, or inclusive upper bounds \
                 (e.g., age restrictions, maximum capacity)."
            }
            Symbol::Equal => {
                "Shows that the value on the left is exactly the same as the value on the right."
            }
            Symbol::GreaterOrEqual => {
                "Shows that the value on the left is larger than or equal to the value on the right. \
                 Best used when expressing minimum requirements, thresholds, or inclusive lower bounds \
                 (e.g., minimum age requirements, minimum purchase amounts)."
            }
            Symbol::Greater => {
                "Shows that the value on the left is larger than the value on the right."
            }
        }
    }

    #[must_use]
    pub fn examples(self) -> &'static [&'static str] {
        match self {
            Symbol::Less => &["3 < 5", "-2 < 0", "1 < 10"],
            Symbol::LessOrEqual => &[
                "Age ≤ 12 for child ticket",
                "Capacity ≤ 50 people",
                "Speed ≤ 30 mph in school zone",
            ],
            Symbol::Equal => &["5 = 5", "2 + 3 = 5", "10 = 10"],
            Symbol::GreaterOrEqual => &[
                "Age ≥ 18 to vote",
                "Purchase ≥ $50 for free shipping",
                "Score ≥ 70 to pass",
            ],
            Symbol::Greater => &["8 > 6", "10 > -5", "100 > 99"],
        }
    }

    /// Stable kebab-case key, used for DOM ids and CSS hooks.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Symbol::Less => "less",
            Symbol::LessOrEqual => "less-equal",
            Symbol::Equal => "equal",
            Symbol::GreaterOrEqual => "greater-equal",
            Symbol::Greater => "greater",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for Symbol {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<" => Ok(Symbol::Less),
            "≤" | "<=" => Ok(Symbol::LessOrEqual),
            "=" => Ok(Symbol::Equal),
            "≥" | ">=" => Ok(Symbol::GreaterOrEqual),
            ">" => Ok(Symbol::Greater),
            other => Err(ParseSymbolError {
                raw: other.to_string(),
            }),
        }
    }
}

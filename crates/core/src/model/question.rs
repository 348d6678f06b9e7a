use std::fmt;

use crate::model::{QuestionId, Scenario, Symbol};

/// Prompt shown for randomly drawn number pairs.
pub const NUMERIC_PROMPT: &str = "Compare these numbers:";

/// Where a question came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionOrigin {
    /// Index into [`crate::model::SCENARIOS`].
    Scenario(usize),
    Numeric { left: i32, right: i32 },
}

/// Non-empty set of symbols accepted as correct for a question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcceptedSymbols(Vec<Symbol>);

impl AcceptedSymbols {
    #[must_use]
    pub fn single(symbol: Symbol) -> Self {
        Self(vec![symbol])
    }

    /// Builds a set from a slice, dropping duplicates.
    ///
    /// Returns `None` when `symbols` is empty.
    #[must_use]
    pub fn from_slice(symbols: &[Symbol]) -> Option<Self> {
        let mut set = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            if !set.contains(symbol) {
                set.push(*symbol);
            }
        }
        if set.is_empty() { None } else { Some(Self(set)) }
    }

    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0.contains(&symbol)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AcceptedSymbols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for symbol in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// The active quiz prompt. Immutable; a session replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    origin: QuestionOrigin,
    prompt: String,
    left: String,
    right: String,
    context: String,
    accepted: AcceptedSymbols,
}

impl Question {
    /// Builds a question from a templated scenario.
    ///
    /// Returns `None` when the scenario accepts no symbol at all.
    #[must_use]
    pub fn from_scenario(id: QuestionId, index: usize, scenario: &Scenario) -> Option<Self> {
        let accepted = AcceptedSymbols::from_slice(scenario.accepted)?;
        Some(Self {
            id,
            origin: QuestionOrigin::Scenario(index),
            prompt: scenario.prompt.to_string(),
            left: scenario.left.to_string(),
            right: scenario.right.to_string(),
            context: scenario.context.to_string(),
            accepted,
        })
    }

    /// Builds an abstract comparison between two integers.
    ///
    /// The accepted symbol is the strict ordering of the pair, so equal
    /// operands accept `=` and never `≤` or `≥`.
    #[must_use]
    pub fn numeric(id: QuestionId, left: i32, right: i32) -> Self {
        Self {
            id,
            origin: QuestionOrigin::Numeric { left, right },
            prompt: NUMERIC_PROMPT.to_string(),
            left: left.to_string(),
            right: right.to_string(),
            context: String::new(),
            accepted: AcceptedSymbols::single(Symbol::for_ordering(left.cmp(&right))),
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn origin(&self) -> QuestionOrigin {
        self.origin
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn left(&self) -> &str {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Unit or context suffix; empty for numeric questions.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    #[must_use]
    pub fn accepted(&self) -> &AcceptedSymbols {
        &self.accepted
    }

    #[must_use]
    pub fn accepts(&self, symbol: Symbol) -> bool {
        self.accepted.contains(symbol)
    }
}

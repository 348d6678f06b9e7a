use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{DEFAULT_SCENARIO_PROBABILITY, Question, QuestionId, QuizSettings, SCENARIOS};

/// Operand range for abstract numeric questions.
pub const NUMERIC_RANGE: RangeInclusive<i32> = -10..=9;

//
// ─── DRAWS ─────────────────────────────────────────────────────────────────────
//

/// The random choice behind a question, before it is turned into one.
///
/// Splitting the draw from construction keeps both halves testable: the draw
/// is all randomness, [`Draw::into_question`] is all logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Draw {
    /// Index into [`SCENARIOS`].
    Scenario(usize),
    Numeric(i32, i32),
}

impl Draw {
    /// Out-of-range scenario indices wrap around the table.
    #[must_use]
    pub fn into_question(self, id: QuestionId) -> Question {
        match self {
            Draw::Scenario(index) => {
                let index = index % SCENARIOS.len();
                let scenario = &SCENARIOS[index];
                // Every table entry accepts a symbol; checked at compile time in `scenario.rs`.
                Question::from_scenario(id, index, scenario)
                    .unwrap_or_else(|| Question::numeric(id, 0, 0))
            }
            Draw::Numeric(left, right) => Question::numeric(id, left, right),
        }
    }
}

//
// ─── SOURCES ───────────────────────────────────────────────────────────────────
//

/// Anything that can hand a session its next question.
pub trait QuestionSource {
    fn next_question(&mut self, id: QuestionId) -> Question;
}

/// Random question generator.
///
/// # Examples
///
/// ```
/// # use quiz_core::generator::QuestionGenerator;
/// # use quiz_core::model::QuestionId;
/// let mut generator = QuestionGenerator::seeded(42);
/// let question = generator.generate(QuestionId::FIRST);
/// assert_eq!(question.accepted().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QuestionGenerator<R = StdRng> {
    rng: R,
    scenario_probability: f64,
}

impl QuestionGenerator<StdRng> {
    /// Deterministic generator for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Builds a generator honoring the configured seed and scenario odds.
    #[must_use]
    pub fn from_settings(settings: &QuizSettings) -> Self {
        let generator = match settings.seed() {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        };
        generator.with_scenario_probability(settings.scenario_probability())
    }
}

impl<R: Rng> QuestionGenerator<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            scenario_probability: DEFAULT_SCENARIO_PROBABILITY,
        }
    }

    /// Values outside `[0, 1]` are clamped; NaN falls back to the default.
    #[must_use]
    pub fn with_scenario_probability(mut self, probability: f64) -> Self {
        self.scenario_probability = if probability.is_nan() {
            DEFAULT_SCENARIO_PROBABILITY
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    /// Flip the coin, then pick a scenario or draw two operands.
    pub fn draw(&mut self) -> Draw {
        if self.rng.random_bool(self.scenario_probability) {
            Draw::Scenario(self.rng.random_range(0..SCENARIOS.len()))
        } else {
            let left = self.rng.random_range(NUMERIC_RANGE);
            let right = self.rng.random_range(NUMERIC_RANGE);
            Draw::Numeric(left, right)
        }
    }

    pub fn generate(&mut self, id: QuestionId) -> Question {
        self.draw().into_question(id)
    }
}

impl<R: Rng> QuestionSource for QuestionGenerator<R> {
    fn next_question(&mut self, id: QuestionId) -> Question {
        self.generate(id)
    }
}

/// Replays a fixed list of draws in order, cycling when exhausted.
///
/// An empty script yields `0 = 0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: Vec<Draw>,
    cursor: usize,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(draws: impl IntoIterator<Item = Draw>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl QuestionSource for ScriptedSource {
    fn next_question(&mut self, id: QuestionId) -> Question {
        let draw = if self.draws.is_empty() {
            Draw::Numeric(0, 0)
        } else {
            let draw = self.draws[self.cursor % self.draws.len()];
            self.cursor = self.cursor.wrapping_add(1);
            draw
        };
        draw.into_question(id)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

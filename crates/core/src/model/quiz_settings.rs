use std::time::Duration;

use thiserror::Error;

/// Delay between a correct answer and the next question.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(1500);
/// Upper bound accepted for the auto-advance delay.
pub const MAX_ADVANCE_DELAY: Duration = Duration::from_secs(60);
/// Chance that a generated question is a templated scenario.
pub const DEFAULT_SCENARIO_PROBABILITY: f64 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct QuizSettings {
    advance_delay: Duration,
    scenario_probability: f64,
    seed: Option<u64>,
}

#[derive(Clone, Debug, Default)]
pub struct QuizSettingsDraft {
    pub advance_delay_ms: Option<u64>,
    pub scenario_probability: Option<f64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum QuizSettingsError {
    #[error("advance delay must be at most {max_ms} ms, got {provided_ms} ms")]
    DelayTooLong { provided_ms: u64, max_ms: u64 },
    #[error("scenario probability must be within [0, 1], got {provided}")]
    InvalidProbability { provided: f64 },
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft, filling unset values with defaults.
    ///
    /// # Errors
    ///
    /// Returns `QuizSettingsError::DelayTooLong` if the delay exceeds
    /// [`MAX_ADVANCE_DELAY`], or `QuizSettingsError::InvalidProbability` if the
    /// probability is not a finite value in `[0, 1]`.
    pub fn validate(self) -> Result<QuizSettings, QuizSettingsError> {
        let advance_delay = match self.advance_delay_ms {
            Some(ms) => {
                let delay = Duration::from_millis(ms);
                if delay > MAX_ADVANCE_DELAY {
                    return Err(QuizSettingsError::DelayTooLong {
                        provided_ms: ms,
                        max_ms: duration_ms(MAX_ADVANCE_DELAY),
                    });
                }
                delay
            }
            None => DEFAULT_ADVANCE_DELAY,
        };

        let scenario_probability = self
            .scenario_probability
            .unwrap_or(DEFAULT_SCENARIO_PROBABILITY);
        if !scenario_probability.is_finite() || !(0.0..=1.0).contains(&scenario_probability) {
            return Err(QuizSettingsError::InvalidProbability {
                provided: scenario_probability,
            });
        }

        Ok(QuizSettings {
            advance_delay,
            scenario_probability,
            seed: self.seed,
        })
    }
}

impl QuizSettings {
    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    #[must_use]
    pub fn advance_delay_ms(&self) -> u64 {
        duration_ms(self.advance_delay)
    }

    #[must_use]
    pub fn scenario_probability(&self) -> f64 {
        self.scenario_probability
    }

    /// Fixed RNG seed, if one was configured.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            advance_delay: DEFAULT_ADVANCE_DELAY,
            scenario_probability: DEFAULT_SCENARIO_PROBABILITY,
            seed: None,
        }
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

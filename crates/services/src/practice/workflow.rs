use std::time::Duration;

use quiz_core::generator::{QuestionGenerator, QuestionSource};
use quiz_core::model::{QuestionId, QuizSettings, QuizSettingsDraft, Symbol};

use super::progress::PracticeProgress;
use super::service::{AnswerOutcome, PracticeSession};
use crate::Clock;
use crate::error::PracticeServiceError;

/// Result of answering the active question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeAnswerResult {
    pub outcome: AnswerOutcome,
    pub progress: PracticeProgress,
}

/// Wires the clock and settings into practice sessions.
#[derive(Debug, Clone)]
pub struct PracticeLoopService {
    clock: Clock,
    settings: QuizSettings,
}

impl PracticeLoopService {
    #[must_use]
    pub fn new(clock: Clock, settings: QuizSettings) -> Self {
        Self { clock, settings }
    }

    /// Build the service from unvalidated settings.
    ///
    /// # Errors
    ///
    /// Returns `PracticeServiceError::Settings` if the draft fails validation.
    pub fn from_draft(clock: Clock, draft: QuizSettingsDraft) -> Result<Self, PracticeServiceError> {
        Ok(Self::new(clock, draft.validate()?))
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.settings.advance_delay()
    }

    /// Start a session backed by the random generator.
    #[must_use]
    pub fn start_session(&self) -> PracticeSession {
        self.start_session_with(QuestionGenerator::from_settings(&self.settings))
    }

    /// Start a session backed by a caller-provided question source.
    #[must_use]
    pub fn start_session_with(
        &self,
        source: impl QuestionSource + Send + 'static,
    ) -> PracticeSession {
        PracticeSession::new(Box::new(source), self.settings.advance_delay())
    }

    pub fn answer_current(
        &self,
        session: &mut PracticeSession,
        selected: Symbol,
    ) -> PracticeAnswerResult {
        let outcome = session.submit(selected, self.clock.now());
        PracticeAnswerResult {
            outcome,
            progress: session.progress(),
        }
    }

    /// Fire the session's pending auto-advance if it is due by this clock.
    pub fn tick(&self, session: &mut PracticeSession) -> Option<QuestionId> {
        session.poll(self.clock.now())
    }

    /// Time left before the session's pending auto-advance is due by this clock.
    #[must_use]
    pub fn advance_remaining(&self, session: &PracticeSession) -> Option<Duration> {
        session.advance_remaining(self.clock.now())
    }
}

impl Default for PracticeLoopService {
    fn default() -> Self {
        Self::new(Clock::System, QuizSettings::default())
    }
}

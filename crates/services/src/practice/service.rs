use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, trace};

use quiz_core::evaluator::{Feedback, Verdict, evaluate};
use quiz_core::generator::QuestionSource;
use quiz_core::model::{Question, QuestionId, Symbol};
use quiz_core::time::add_duration;

use super::progress::PracticeProgress;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Auto-advance scheduled by a correct answer.
///
/// Keyed to the question it was scheduled for; once that question is no
/// longer active the advance is stale and never fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAdvance {
    pub question_id: QuestionId,
    pub due_at: DateTime<Utc>,
}

/// Result of submitting a symbol for the active question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Scored. The next question arrives at `advance_at`.
    Correct { advance_at: DateTime<Utc> },
    /// Counted as an attempt; the question stays active for a retry.
    TryAgain,
    /// Submitted during the post-correct delay window; nothing changed.
    Ignored,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Score, feedback and the active question for one practice run.
///
/// Every change goes through `submit`, `poll`, `reset` or `skip`, and each of
/// those keeps `score <= attempts`.
pub struct PracticeSession {
    source: Box<dyn QuestionSource + Send>,
    advance_delay: Duration,
    question: Question,
    last_answer: Option<Symbol>,
    feedback: Feedback,
    score: u32,
    attempts: u32,
    answered_correctly: bool,
    pending: Option<PendingAdvance>,
}

impl PracticeSession {
    /// Start a session and draw its first question.
    #[must_use]
    pub fn new(mut source: Box<dyn QuestionSource + Send>, advance_delay: Duration) -> Self {
        let question = source.next_question(QuestionId::FIRST);
        debug!(question_id = %question.id(), prompt = question.prompt(), "first question");
        Self {
            source,
            advance_delay,
            question,
            last_answer: None,
            feedback: Feedback::None,
            score: 0,
            attempts: 0,
            answered_correctly: false,
            pending: None,
        }
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn last_answer(&self) -> Option<Symbol> {
        self.last_answer
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// True while a correct answer waits for its auto-advance.
    #[must_use]
    pub fn is_answered_correctly(&self) -> bool {
        self.answered_correctly
    }

    #[must_use]
    pub fn pending_advance(&self) -> Option<PendingAdvance> {
        self.pending
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    #[must_use]
    pub fn progress(&self) -> PracticeProgress {
        PracticeProgress::new(self.score, self.attempts)
    }

    /// Evaluate `selected` against the active question.
    ///
    /// A correct answer schedules the next question `advance_delay` after
    /// `now`; further submissions are ignored until [`Self::poll`] fires it.
    pub fn submit(&mut self, selected: Symbol, now: DateTime<Utc>) -> AnswerOutcome {
        if self.answered_correctly {
            trace!(%selected, question_id = %self.question.id(), "answer ignored during advance delay");
            return AnswerOutcome::Ignored;
        }

        self.attempts = self.attempts.saturating_add(1);
        self.last_answer = Some(selected);

        let verdict = evaluate(selected, &self.question);
        self.feedback = Feedback::from(verdict);
        debug!(%selected, ?verdict, question_id = %self.question.id(), "answer evaluated");

        match verdict {
            Verdict::Correct => {
                self.score = self.score.saturating_add(1);
                self.answered_correctly = true;
                let advance_at = add_duration(now, self.advance_delay);
                self.pending = Some(PendingAdvance {
                    question_id: self.question.id(),
                    due_at: advance_at,
                });
                AnswerOutcome::Correct { advance_at }
            }
            Verdict::Incorrect => AnswerOutcome::TryAgain,
        }
    }

    /// Fire the pending auto-advance if it is due.
    ///
    /// Returns the new question id when the question was replaced. Advances
    /// scheduled for an earlier question are discarded.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<QuestionId> {
        let pending = self.pending?;
        if pending.question_id != self.question.id() {
            self.pending = None;
            return None;
        }
        if now < pending.due_at {
            return None;
        }
        self.pending = None;
        self.answered_correctly = false;
        Some(self.replace_question())
    }

    /// Time left before the active question's auto-advance is due.
    ///
    /// `None` when nothing is pending for the active question. An advance
    /// that is already due reports zero.
    #[must_use]
    pub fn advance_remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        let pending = self
            .pending
            .filter(|pending| pending.question_id == self.question.id())?;
        Some((pending.due_at - now).to_std().unwrap_or(Duration::ZERO))
    }

    /// Zero the counters and start over with a fresh question.
    ///
    /// Cancels any pending auto-advance.
    pub fn reset(&mut self) -> QuestionId {
        info!(score = self.score, attempts = self.attempts, "practice reset");
        self.score = 0;
        self.attempts = 0;
        self.cancel_advance();
        self.replace_question()
    }

    /// Count an attempt and move on without scoring.
    ///
    /// Cancels any pending auto-advance.
    pub fn skip(&mut self) -> QuestionId {
        debug!(question_id = %self.question.id(), "question skipped");
        self.attempts = self.attempts.saturating_add(1);
        self.cancel_advance();
        self.replace_question()
    }

    fn cancel_advance(&mut self) {
        self.pending = None;
        self.answered_correctly = false;
    }

    fn replace_question(&mut self) -> QuestionId {
        let id = self.question.id().next();
        self.question = self.source.next_question(id);
        self.last_answer = None;
        self.feedback = Feedback::None;
        debug!(question_id = %id, prompt = self.question.prompt(), "next question");
        id
    }
}

impl fmt::Debug for PracticeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticeSession")
            .field("question", &self.question)
            .field("last_answer", &self.last_answer)
            .field("feedback", &self.feedback)
            .field("score", &self.score)
            .field("attempts", &self.attempts)
            .field("answered_correctly", &self.answered_correctly)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

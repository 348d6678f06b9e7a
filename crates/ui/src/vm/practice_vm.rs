use std::time::Duration;

use quiz_core::evaluator::Feedback;
use quiz_core::model::Symbol;
use services::{AnswerOutcome, PracticeLoopService, PracticeSession};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PracticeIntent {
    Answer(Symbol),
    Skip,
    Reset,
}

/// What the view has to do with its auto-advance task after an intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PracticeEffect {
    /// Leave any running task alone.
    Idle,
    /// Start a task that calls [`PracticeVm::tick`] after the delay.
    ScheduleAdvance(Duration),
    /// Cancel the running task; the question was replaced.
    CancelAdvance,
}

/// Floor for re-checking an advance that was not due yet.
const MIN_ADVANCE_RETRY: Duration = Duration::from_millis(20);

/// Result of checking the pending auto-advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceTick {
    /// The question was replaced.
    Advanced,
    /// Still pending for the active question; check again after this long.
    Waiting(Duration),
    /// Nothing is pending for the active question.
    Idle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub prompt: String,
    pub left: String,
    pub right: String,
    pub context: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerButtonState {
    Neutral,
    Correct,
    Retry,
}

impl AnswerButtonState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            AnswerButtonState::Neutral => "answer-btn",
            AnswerButtonState::Correct => "answer-btn answer-btn--correct",
            AnswerButtonState::Retry => "answer-btn answer-btn--retry",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerButtonVm {
    pub symbol: Symbol,
    pub glyph: &'static str,
    pub dom_id: String,
    pub label: String,
    pub state: AnswerButtonState,
    pub disabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTone {
    Success,
    Retry,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub message: &'static str,
    pub tone: FeedbackTone,
}

impl FeedbackVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.tone {
            FeedbackTone::Success => "quiz-feedback quiz-feedback--success",
            FeedbackTone::Retry => "quiz-feedback quiz-feedback--retry",
        }
    }
}

pub struct PracticeVm {
    session: PracticeSession,
}

impl PracticeVm {
    #[must_use]
    pub fn new(session: PracticeSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &PracticeSession {
        &self.session
    }

    pub fn dispatch(
        &mut self,
        intent: PracticeIntent,
        practice_loop: &PracticeLoopService,
    ) -> PracticeEffect {
        match intent {
            PracticeIntent::Answer(symbol) => {
                let result = practice_loop.answer_current(&mut self.session, symbol);
                match result.outcome {
                    AnswerOutcome::Correct { .. } => {
                        PracticeEffect::ScheduleAdvance(self.session.advance_delay())
                    }
                    AnswerOutcome::TryAgain | AnswerOutcome::Ignored => PracticeEffect::Idle,
                }
            }
            PracticeIntent::Skip => {
                self.session.skip();
                PracticeEffect::CancelAdvance
            }
            PracticeIntent::Reset => {
                self.session.reset();
                PracticeEffect::CancelAdvance
            }
        }
    }

    /// Fire the auto-advance if the clock says it is due.
    ///
    /// The wait reported for a pending advance never exceeds the advance
    /// delay, so a clock that stepped backwards is re-checked at least that
    /// often instead of stalling the question.
    pub fn tick(&mut self, practice_loop: &PracticeLoopService) -> AdvanceTick {
        if practice_loop.tick(&mut self.session).is_some() {
            return AdvanceTick::Advanced;
        }
        match practice_loop.advance_remaining(&self.session) {
            Some(remaining) => {
                let ceiling = self.session.advance_delay().max(MIN_ADVANCE_RETRY);
                AdvanceTick::Waiting(remaining.clamp(MIN_ADVANCE_RETRY, ceiling))
            }
            None => AdvanceTick::Idle,
        }
    }

    #[must_use]
    pub fn question_card(&self) -> QuestionCardVm {
        let question = self.session.question();
        let context = Some(question.context())
            .filter(|context| !context.is_empty())
            .map(str::to_string);
        QuestionCardVm {
            prompt: question.prompt().to_string(),
            left: question.left().to_string(),
            right: question.right().to_string(),
            context,
        }
    }

    #[must_use]
    pub fn answer_buttons(&self) -> Vec<AnswerButtonVm> {
        let disabled = self.session.is_answered_correctly();
        let last_answer = self.session.last_answer();
        let was_correct = self.session.feedback().is_correct();

        Symbol::ALL
            .iter()
            .map(|&symbol| {
                let state = match last_answer {
                    Some(answer) if answer == symbol && was_correct => AnswerButtonState::Correct,
                    Some(answer) if answer == symbol => AnswerButtonState::Retry,
                    _ => AnswerButtonState::Neutral,
                };
                AnswerButtonVm {
                    symbol,
                    glyph: symbol.glyph(),
                    dom_id: format!("answer-{}", symbol.key()),
                    label: symbol.name().to_string(),
                    state,
                    disabled,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackVm> {
        let feedback = self.session.feedback();
        let message = feedback.message()?;
        let tone = match feedback {
            Feedback::Correct => FeedbackTone::Success,
            Feedback::TryAgain | Feedback::None => FeedbackTone::Retry,
        };
        Some(FeedbackVm { message, tone })
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        let progress = self.session.progress();
        format!("Score: {}/{}", progress.score, progress.attempts)
    }

    #[must_use]
    pub fn accuracy_label(&self) -> Option<String> {
        self.session
            .progress()
            .accuracy_percent()
            .map(|percent| format!("{percent}% correct"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::generator::{Draw, ScriptedSource};
    use quiz_core::model::QuizSettings;
    use quiz_core::time::fixed_clock;

    fn practice_loop() -> PracticeLoopService {
        PracticeLoopService::new(fixed_clock(), QuizSettings::default())
    }

    fn vm(draws: impl IntoIterator<Item = Draw>) -> PracticeVm {
        PracticeVm::new(practice_loop().start_session_with(ScriptedSource::new(draws)))
    }

    #[test]
    fn question_card_hides_empty_context() {
        let numeric = vm([Draw::Numeric(-3, 5)]).question_card();
        assert_eq!(numeric.prompt, "Compare these numbers:");
        assert_eq!(numeric.context, None);

        let scenario = vm([Draw::Scenario(1)]).question_card();
        assert_eq!(scenario.left, "Speed");
        assert_eq!(scenario.context.as_deref(), Some("mph"));
    }

    #[test]
    fn correct_answer_schedules_advance_and_disables_buttons() {
        let practice_loop = practice_loop();
        let mut vm = vm([Draw::Numeric(7, 7)]);

        let effect = vm.dispatch(PracticeIntent::Answer(Symbol::Equal), &practice_loop);

        assert_eq!(effect, PracticeEffect::ScheduleAdvance(Duration::from_millis(1500)));
        let buttons = vm.answer_buttons();
        assert!(buttons.iter().all(|b| b.disabled));
        let equal = buttons.iter().find(|b| b.symbol == Symbol::Equal).unwrap();
        assert_eq!(equal.state, AnswerButtonState::Correct);
        assert_eq!(equal.dom_id, "answer-equal");
        assert_eq!(vm.feedback().unwrap().tone, FeedbackTone::Success);
        assert_eq!(vm.score_label(), "Score: 1/1");
    }

    #[test]
    fn wrong_answer_marks_only_selected_button() {
        let practice_loop = practice_loop();
        let mut vm = vm([Draw::Scenario(0)]);

        let effect = vm.dispatch(PracticeIntent::Answer(Symbol::Less), &practice_loop);

        assert_eq!(effect, PracticeEffect::Idle);
        let buttons = vm.answer_buttons();
        assert!(buttons.iter().all(|b| !b.disabled));
        let states: Vec<_> = buttons.iter().map(|b| b.state).collect();
        assert_eq!(
            states,
            vec![
                AnswerButtonState::Retry,
                AnswerButtonState::Neutral,
                AnswerButtonState::Neutral,
                AnswerButtonState::Neutral,
                AnswerButtonState::Neutral,
            ]
        );
        assert_eq!(vm.feedback().unwrap().class(), "quiz-feedback quiz-feedback--retry");
        assert_eq!(vm.accuracy_label().as_deref(), Some("0% correct"));
    }

    #[test]
    fn skip_and_reset_cancel_advance() {
        let practice_loop = practice_loop();
        let mut vm = vm([Draw::Numeric(1, 2), Draw::Numeric(3, 1)]);
        vm.dispatch(PracticeIntent::Answer(Symbol::Less), &practice_loop);

        assert_eq!(
            vm.dispatch(PracticeIntent::Skip, &practice_loop),
            PracticeEffect::CancelAdvance
        );
        assert_eq!(vm.score_label(), "Score: 1/2");
        assert!(vm.feedback().is_none());

        assert_eq!(
            vm.dispatch(PracticeIntent::Reset, &practice_loop),
            PracticeEffect::CancelAdvance
        );
        assert_eq!(vm.score_label(), "Score: 0/0");
        assert!(vm.accuracy_label().is_none());
    }

    #[test]
    fn tick_before_deadline_keeps_question() {
        let practice_loop = practice_loop();
        let mut vm = vm([Draw::Numeric(1, 2), Draw::Numeric(3, 1)]);
        vm.dispatch(PracticeIntent::Answer(Symbol::Less), &practice_loop);

        assert_eq!(
            vm.tick(&practice_loop),
            AdvanceTick::Waiting(Duration::from_millis(1500))
        );
        assert_eq!(vm.question_card().left, "1");

        let mut later = fixed_clock();
        later.advance(Duration::from_millis(1500));
        assert_eq!(vm.tick(&practice_loop.clone().with_clock(later)), AdvanceTick::Advanced);
        assert_eq!(vm.question_card().left, "3");
        assert_eq!(vm.tick(&practice_loop), AdvanceTick::Idle);
    }

    #[test]
    fn early_tick_then_later_tick_advances() {
        let mut answered_at = fixed_clock();
        answered_at.advance(Duration::from_secs(3600));
        let answer_loop = practice_loop().with_clock(answered_at);
        let mut vm = vm([Draw::Numeric(-3, 5), Draw::Numeric(6, 2)]);
        vm.dispatch(PracticeIntent::Answer(Symbol::Less), &answer_loop);

        // Clock behind the answer time: the wait is capped at the advance delay.
        let behind = practice_loop();
        assert_eq!(vm.tick(&behind), AdvanceTick::Waiting(Duration::from_millis(1500)));
        assert!(vm.answer_buttons().iter().all(|b| b.disabled));

        let mut almost = answered_at;
        almost.advance(Duration::from_millis(1490));
        assert_eq!(
            vm.tick(&practice_loop().with_clock(almost)),
            AdvanceTick::Waiting(Duration::from_millis(20))
        );

        let mut due = answered_at;
        due.advance(Duration::from_millis(1500));
        assert_eq!(vm.tick(&practice_loop().with_clock(due)), AdvanceTick::Advanced);
        assert_eq!(vm.question_card().left, "6");
        assert!(vm.answer_buttons().iter().all(|b| !b.disabled));
        assert_eq!(
            vm.dispatch(PracticeIntent::Answer(Symbol::Greater), &practice_loop().with_clock(due)),
            PracticeEffect::ScheduleAdvance(Duration::from_millis(1500))
        );
    }
}

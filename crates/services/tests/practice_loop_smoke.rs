use std::time::Duration;

use quiz_core::evaluator::{CORRECT_MESSAGE, Feedback, TRY_AGAIN_MESSAGE};
use quiz_core::generator::{Draw, ScriptedSource};
use quiz_core::model::{QuestionId, QuestionOrigin, QuizSettingsDraft, Symbol};
use quiz_core::time::fixed_now;
use services::{AnswerOutcome, Clock, PracticeLoopService, PracticeServiceError};

fn loop_at(offset_ms: u64) -> PracticeLoopService {
    let mut clock = Clock::fixed(fixed_now());
    clock.advance(Duration::from_millis(offset_ms));
    PracticeLoopService::from_draft(
        clock,
        QuizSettingsDraft {
            seed: Some(2024),
            ..QuizSettingsDraft::default()
        },
    )
    .unwrap()
}

#[test]
fn age_scenario_correct_then_auto_advance() {
    let start = loop_at(0);
    let mut session = start.start_session_with(ScriptedSource::new([
        Draw::Scenario(2),
        Draw::Numeric(-3, 5),
    ]));
    assert_eq!(session.question().left(), "Age");
    assert_eq!(session.question().right(), "18");
    assert_eq!(session.question().context(), "years");

    let wrong = start.answer_current(&mut session, Symbol::Equal);
    assert_eq!(wrong.outcome, AnswerOutcome::TryAgain);
    assert_eq!(wrong.progress.score, 0);
    assert_eq!(session.feedback().message(), Some(TRY_AGAIN_MESSAGE));

    let right = start.answer_current(&mut session, Symbol::GreaterOrEqual);
    assert!(matches!(right.outcome, AnswerOutcome::Correct { .. }));
    assert_eq!((right.progress.score, right.progress.attempts), (1, 2));
    assert_eq!(session.feedback().message(), Some(CORRECT_MESSAGE));

    assert_eq!(loop_at(1000).tick(&mut session), None);
    assert_eq!(loop_at(1500).tick(&mut session), Some(QuestionId::new(2)));

    let next = session.question();
    assert_eq!(next.origin(), QuestionOrigin::Numeric { left: -3, right: 5 });
    assert_eq!((next.left(), next.right()), ("-3", "5"));
    assert_eq!(next.accepted().as_slice(), &[Symbol::Less]);
    assert_eq!(session.feedback(), Feedback::None);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let service = loop_at(0);
    let mut a = service.start_session();
    let mut b = service.start_session();
    for _ in 0..20 {
        assert_eq!(a.question(), b.question());
        a.skip();
        b.skip();
    }
    assert_eq!(a.attempts(), 20);
    assert_eq!(a.score(), 0);
}

#[test]
fn reset_after_progress_starts_fresh() {
    let service = loop_at(0);
    let mut session = service.start_session_with(ScriptedSource::new([
        Draw::Numeric(7, 7),
        Draw::Numeric(2, 1),
    ]));
    service.answer_current(&mut session, Symbol::Equal);
    session.skip();
    assert_eq!((session.score(), session.attempts()), (1, 2));

    let before = session.question().id();
    session.reset();

    assert_eq!((session.score(), session.attempts()), (0, 0));
    assert_ne!(session.question().id(), before);
    assert!(session.last_answer().is_none());
}

#[test]
fn rejects_invalid_settings() {
    let err = PracticeLoopService::from_draft(
        Clock::fixed(fixed_now()),
        QuizSettingsDraft {
            advance_delay_ms: Some(120_000),
            ..QuizSettingsDraft::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, PracticeServiceError::Settings(_)));
}

#[test]
fn advance_delay_follows_settings() {
    let service = PracticeLoopService::from_draft(
        Clock::fixed(fixed_now()),
        QuizSettingsDraft {
            advance_delay_ms: Some(250),
            ..QuizSettingsDraft::default()
        },
    )
    .unwrap();
    let session = service.start_session();
    assert_eq!(service.advance_delay(), Duration::from_millis(250));
    assert_eq!(session.advance_delay(), Duration::from_millis(250));
}

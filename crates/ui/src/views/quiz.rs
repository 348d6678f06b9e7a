use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::debug;

use crate::context::AppContext;
use crate::vm::{AdvanceTick, PracticeEffect, PracticeIntent, PracticeVm};

/// Practice quiz shared by both layouts.
///
/// Owns the session for as long as the panel is mounted. A correct answer
/// spawns a task that sleeps for the advance delay and then ticks the
/// session, sleeping again while the advance is not due yet; skip and reset
/// cancel that task.
#[component]
pub fn QuizPanel(compact: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let practice_loop = ctx.practice_loop();
    let vm = use_signal(|| PracticeVm::new(ctx.new_session()));
    let advance_task = use_signal(|| None::<Task>);

    let dispatch_intent = use_callback(move |intent: PracticeIntent| {
        let mut vm = vm;
        let mut advance_task = advance_task;
        let effect = vm.write().dispatch(intent, &practice_loop);

        match effect {
            PracticeEffect::Idle => {}
            PracticeEffect::CancelAdvance => {
                if let Some(task) = advance_task.write().take() {
                    task.cancel();
                }
            }
            PracticeEffect::ScheduleAdvance(delay) => {
                if let Some(task) = advance_task.write().take() {
                    task.cancel();
                }
                let practice_loop = practice_loop.clone();
                let task = spawn(async move {
                    let mut wait = delay;
                    loop {
                        tokio::time::sleep(wait).await;
                        let tick = vm.write().tick(&practice_loop);
                        match tick {
                            AdvanceTick::Waiting(remaining) => {
                                debug!(?remaining, "auto-advance not due yet");
                                wait = remaining;
                            }
                            AdvanceTick::Advanced | AdvanceTick::Idle => {
                                debug!(?tick, "auto-advance finished");
                                break;
                            }
                        }
                    }
                    advance_task.set(None);
                });
                advance_task.set(Some(task));
            }
        }
    });

    let (card, buttons, feedback, score_label, accuracy_label) = {
        let vm = vm.read();
        (
            vm.question_card(),
            vm.answer_buttons(),
            vm.feedback(),
            vm.score_label(),
            vm.accuracy_label(),
        )
    };
    let panel_class = if compact {
        "quiz-panel quiz-panel--compact"
    } else {
        "quiz-panel"
    };

    rsx! {
        section { class: "{panel_class}",
            header { class: "quiz-header",
                h3 { class: "quiz-title", "Comparison Symbols Practice" }
                button {
                    id: "quiz-reset",
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(PracticeIntent::Reset),
                    "Reset"
                }
            }
            div { class: "quiz-question",
                p { class: "quiz-prompt", "{card.prompt}" }
                div { class: "quiz-operands",
                    span { class: "quiz-operand", "{card.left}" }
                    span { class: "quiz-slot", "?" }
                    span { class: "quiz-operand", "{card.right}" }
                    if let Some(context) = card.context.as_ref() {
                        span { class: "quiz-context", "{context}" }
                    }
                }
            }
            div { class: "quiz-answers",
                for answer in buttons {
                    button {
                        key: "{answer.dom_id}",
                        id: "{answer.dom_id}",
                        class: answer.state.class(),
                        r#type: "button",
                        title: "{answer.label}",
                        aria_label: "{answer.label}",
                        disabled: answer.disabled,
                        onclick: move |_| dispatch_intent.call(PracticeIntent::Answer(answer.symbol)),
                        span { class: "answer-glyph", "{answer.glyph}" }
                    }
                }
            }
            p { class: "quiz-hint", "What symbol goes between these numbers?" }
            if let Some(feedback) = feedback.as_ref() {
                div { class: feedback.class(),
                    p { "{feedback.message}" }
                }
            }
            footer { class: "quiz-footer",
                p { class: "quiz-score", "{score_label}" }
                if let Some(label) = accuracy_label.as_ref() {
                    p { class: "quiz-accuracy", "{label}" }
                }
                button {
                    id: "quiz-skip",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(PracticeIntent::Skip),
                    "Skip"
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::views::{QuizPanel, ReferencePanel};

/// Reference panel and quiz side by side.
#[component]
pub fn PracticeView() -> Element {
    rsx! {
        div { class: "page practice-page",
            header { class: "view-header",
                h2 { class: "view-title", "Comparison Symbols" }
                p { class: "view-subtitle", "Learn the symbols, then test yourself." }
            }
            div { class: "view-divider" }
            div { class: "practice-layout",
                ReferencePanel {}
                QuizPanel { compact: false }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::views::QuizPanel;

#[component]
pub fn CompactPracticeView() -> Element {
    rsx! {
        div { class: "page compact-page",
            h2 { class: "view-title", "Practice" }
            QuizPanel { compact: true }
        }
    }
}

use dioxus::prelude::*;

use crate::context::{AppContext, Layout};
use crate::views::{CompactPracticeView, PracticeView};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();

    match ctx.layout() {
        Layout::Full => rsx! { PracticeView {} },
        Layout::Compact => rsx! { CompactPracticeView {} },
    }
}

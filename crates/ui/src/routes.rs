use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CompactPracticeView, HomeView, PracticeView, ReferenceView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/practice", PracticeView)] Practice {},
        #[route("/compact", CompactPracticeView)] Compact {},
        #[route("/reference", ReferenceView)] Reference {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "< ≤ = ≥ >" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Practice {}, "Learn & Practice" } }
                li { Link { to: Route::Compact {}, "Quick Quiz" } }
                li { Link { to: Route::Reference {}, "Symbols" } }
            }
        }
    }
}

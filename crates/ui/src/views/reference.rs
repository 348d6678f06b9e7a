use dioxus::prelude::*;

use crate::vm::{DEFAULT_REFERENCE_SYMBOL, map_symbol_detail, map_symbol_tabs};

#[component]
pub fn ReferencePanel() -> Element {
    let mut selected = use_signal(|| DEFAULT_REFERENCE_SYMBOL);
    let tabs = map_symbol_tabs(selected());
    let detail = map_symbol_detail(selected());

    rsx! {
        section { class: "reference-panel",
            div { class: "symbol-tabs", role: "tablist",
                for tab in tabs {
                    button {
                        key: "{tab.glyph}",
                        class: tab.class,
                        r#type: "button",
                        role: "tab",
                        onclick: move |_| selected.set(tab.symbol),
                        "{tab.glyph}"
                    }
                }
            }
            div { class: "symbol-detail",
                span { class: "symbol-detail-glyph", "{detail.glyph}" }
                h3 { class: "symbol-detail-name", "{detail.name}" }
                p { class: "symbol-detail-description", "{detail.description}" }
                h4 { class: "symbol-detail-examples-title", "Examples" }
                ul { class: "symbol-detail-examples",
                    for example in detail.examples.iter() {
                        li { key: "{example}", "{example}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ReferenceView() -> Element {
    rsx! {
        div { class: "page reference-page",
            header { class: "view-header",
                h2 { class: "view-title", "Comparison Symbols" }
                p { class: "view-subtitle", "Pick a symbol to see what it means." }
            }
            div { class: "view-divider" }
            ReferencePanel {}
        }
    }
}

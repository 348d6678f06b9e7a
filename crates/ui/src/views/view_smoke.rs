use quiz_core::generator::Draw;

use super::test_harness::{ViewKind, setup_view_harness};
use crate::context::Layout;

fn rendered(view: ViewKind, layout: Layout, draws: Vec<Draw>) -> String {
    let mut harness = setup_view_harness(view, layout, draws);
    harness.rebuild();
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_renders_reference_and_quiz() {
    let html = rendered(ViewKind::Practice, Layout::Full, vec![Draw::Numeric(-3, 5)]);
    assert!(html.contains("Compare these numbers:"), "missing prompt in {html}");
    assert!(html.contains("-3"), "missing left operand in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Comparison Symbols Practice"), "missing quiz title in {html}");
    assert!(
        html.contains("What symbol goes between these numbers?"),
        "missing answer hint in {html}"
    );
    assert!(html.contains("Equal To"), "missing reference detail in {html}");
    assert!(html.contains("2 + 3 = 5"), "missing reference example in {html}");
    for id in [
        "answer-less",
        "answer-less-equal",
        "answer-equal",
        "answer-greater-equal",
        "answer-greater",
    ] {
        assert!(html.contains(id), "missing {id} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn compact_view_has_no_reference_panel() {
    let html = rendered(ViewKind::Compact, Layout::Compact, vec![Draw::Scenario(2)]);
    assert!(html.contains("Minimum of 18:"), "missing prompt in {html}");
    assert!(html.contains("years"), "missing context in {html}");
    assert!(html.contains("quiz-panel--compact"), "missing compact class in {html}");
    assert!(!html.contains("reference-panel"), "unexpected reference panel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_follows_configured_layout() {
    let full = rendered(ViewKind::Home, Layout::Full, vec![Draw::Numeric(1, 1)]);
    assert!(full.contains("reference-panel"), "missing reference panel in {full}");

    let compact = rendered(ViewKind::Home, Layout::Compact, vec![Draw::Numeric(1, 1)]);
    assert!(!compact.contains("reference-panel"), "unexpected reference panel in {compact}");
    assert!(compact.contains("Skip"), "missing skip in {compact}");
    assert!(compact.contains("quiz-hint"), "missing answer hint in {compact}");
}

#[tokio::test(flavor = "current_thread")]
async fn reference_view_lists_all_symbols() {
    let html = rendered(ViewKind::Reference, Layout::Full, Vec::new());
    for glyph in ["≤", "≥", "=", "&lt;", "&gt;"] {
        assert!(html.contains(glyph), "missing {glyph} in {html}");
    }
    assert!(html.contains("symbol-tab--active"), "missing active tab in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn numeric_question_omits_context() {
    let html = rendered(ViewKind::Compact, Layout::Compact, vec![Draw::Numeric(4, 2)]);
    assert!(!html.contains("quiz-context"), "unexpected context in {html}");
    assert!(!html.contains("quiz-feedback"), "unexpected feedback in {html}");
}

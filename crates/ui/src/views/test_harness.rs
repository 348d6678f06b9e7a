use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::generator::{Draw, ScriptedSource};
use quiz_core::model::QuizSettings;
use quiz_core::time::fixed_clock;
use services::{PracticeLoopService, PracticeSession};

use crate::context::{Layout, UiApp, build_app_context};
use crate::views::{CompactPracticeView, HomeView, PracticeView, ReferenceView};

struct TestApp {
    layout: Layout,
    practice_loop: Arc<PracticeLoopService>,
    draws: Vec<Draw>,
}

impl UiApp for TestApp {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn practice_loop(&self) -> Arc<PracticeLoopService> {
        Arc::clone(&self.practice_loop)
    }

    fn new_session(&self) -> PracticeSession {
        self.practice_loop
            .start_session_with(ScriptedSource::new(self.draws.clone()))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Practice,
    Compact,
    Reference,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Practice => rsx! { PracticeView {} },
        ViewKind::Compact => rsx! { CompactPracticeView {} },
        ViewKind::Reference => rsx! { ReferenceView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_view_harness(view: ViewKind, layout: Layout, draws: Vec<Draw>) -> ViewHarness {
    let practice_loop = Arc::new(PracticeLoopService::new(
        fixed_clock(),
        QuizSettings::default(),
    ));
    let app = Arc::new(TestApp {
        layout,
        practice_loop,
        draws,
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });
    ViewHarness { dom }
}

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use services::{PracticeLoopService, PracticeSession};

/// Which presentation of the practice quiz the home route shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Reference panel beside the quiz.
    #[default]
    Full,
    /// Quiz card only.
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLayoutError(String);

impl fmt::Display for ParseLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown layout {:?} (expected full or compact)", self.0)
    }
}

impl std::error::Error for ParseLayoutError {}

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Layout::Full),
            "compact" => Ok(Layout::Compact),
            _ => Err(ParseLayoutError(s.to_string())),
        }
    }
}

pub trait UiApp: Send + Sync {
    fn layout(&self) -> Layout;
    fn practice_loop(&self) -> Arc<PracticeLoopService>;

    /// Fresh session for a newly mounted quiz panel.
    fn new_session(&self) -> PracticeSession {
        self.practice_loop().start_session()
    }
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    layout: Layout,
    practice_loop: Arc<PracticeLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
            layout: app.layout(),
            practice_loop: app.practice_loop(),
        }
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn practice_loop(&self) -> Arc<PracticeLoopService> {
        Arc::clone(&self.practice_loop)
    }

    #[must_use]
    pub fn new_session(&self) -> PracticeSession {
        self.app.new_session()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

mod progress;
mod service;
mod workflow;

// Public API of the practice subsystem.
pub use progress::PracticeProgress;
pub use service::{AnswerOutcome, PendingAdvance, PracticeSession};
pub use workflow::{PracticeAnswerResult, PracticeLoopService};

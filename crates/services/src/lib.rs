#![forbid(unsafe_code)]

pub mod error;
pub mod practice;

pub use quiz_core::Clock;

pub use error::PracticeServiceError;
pub use practice::{
    AnswerOutcome, PendingAdvance, PracticeAnswerResult, PracticeLoopService, PracticeProgress,
    PracticeSession,
};

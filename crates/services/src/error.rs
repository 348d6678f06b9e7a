//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuizSettingsError;

/// Errors emitted while building the practice services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PracticeServiceError {
    #[error(transparent)]
    Settings(#[from] QuizSettingsError),
}

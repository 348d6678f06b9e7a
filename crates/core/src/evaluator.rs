use crate::model::{Question, Symbol};

pub const CORRECT_MESSAGE: &str = "Correct! ✨";
pub const TRY_AGAIN_MESSAGE: &str = "Try again! Think about the relationship between the numbers.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Feedback line shown under the question.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    TryAgain,
}

impl Feedback {
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Feedback::None => None,
            Feedback::Correct => Some(CORRECT_MESSAGE),
            Feedback::TryAgain => Some(TRY_AGAIN_MESSAGE),
        }
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

impl From<Verdict> for Feedback {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => Feedback::Correct,
            Verdict::Incorrect => Feedback::TryAgain,
        }
    }
}

/// Checks `selected` against the question's accepted set.
#[must_use]
pub fn evaluate(selected: Symbol, question: &Question) -> Verdict {
    if question.accepts(selected) {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

/// Score line data for a practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeProgress {
    pub score: u32,
    pub attempts: u32,
}

impl PracticeProgress {
    #[must_use]
    pub fn new(score: u32, attempts: u32) -> Self {
        Self { score, attempts }
    }

    /// Whole-number percentage of attempts that scored; `None` before the first attempt.
    #[must_use]
    pub fn accuracy_percent(&self) -> Option<u32> {
        if self.attempts == 0 {
            return None;
        }
        let percent = u64::from(self.score) * 100 / u64::from(self.attempts);
        Some(u32::try_from(percent).unwrap_or(100))
    }
}

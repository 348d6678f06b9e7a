mod compact;
mod home;
mod practice;
mod quiz;
mod reference;

pub use compact::CompactPracticeView;
pub use home::HomeView;
pub use practice::PracticeView;
pub use quiz::QuizPanel;
pub use reference::{ReferencePanel, ReferenceView};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

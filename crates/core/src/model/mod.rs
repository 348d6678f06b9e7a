mod ids;
mod question;
mod quiz_settings;
mod scenario;
mod symbol;

pub use ids::{ParseIdError, QuestionId};
pub use question::{AcceptedSymbols, NUMERIC_PROMPT, Question, QuestionOrigin};
pub use quiz_settings::{
    DEFAULT_ADVANCE_DELAY, DEFAULT_SCENARIO_PROBABILITY, MAX_ADVANCE_DELAY, QuizSettings,
    QuizSettingsDraft, QuizSettingsError,
};
pub use scenario::{SCENARIOS, Scenario};
pub use symbol::{ParseSymbolError, Symbol};

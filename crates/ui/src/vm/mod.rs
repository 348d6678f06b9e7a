mod practice_vm;
mod reference_vm;

pub use practice_vm::{
    AdvanceTick, AnswerButtonState, AnswerButtonVm, FeedbackTone, FeedbackVm, PracticeEffect,
    PracticeIntent, PracticeVm, QuestionCardVm,
};
pub use reference_vm::{
    DEFAULT_REFERENCE_SYMBOL, SymbolDetailVm, SymbolTabVm, map_symbol_detail, map_symbol_tabs,
};

use crate::model::Symbol;

/// A hand-authored real-world comparison with a fixed correct symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub prompt: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub context: &'static str,
    pub accepted: &'static [Symbol],
}

/// Templated questions drawn on the scenario branch of the generator.
pub const SCENARIOS: [Scenario; 5] = [
    Scenario {
        prompt: "Maximum of 50:",
        left: "Capacity",
        right: "50",
        context: "people",
        accepted: &[Symbol::LessOrEqual],
    },
    Scenario {
        prompt: "Maximum of 30:",
        left: "Speed",
        right: "30",
        context: "mph",
        accepted: &[Symbol::LessOrEqual],
    },
    Scenario {
        prompt: "Minimum of 18:",
        left: "Age",
        right: "18",
        context: "years",
        accepted: &[Symbol::GreaterOrEqual],
    },
    Scenario {
        prompt: "Minimum of $50:",
        left: "Purchase",
        right: "$50",
        context: "",
        accepted: &[Symbol::GreaterOrEqual],
    },
    Scenario {
        prompt: "Minimum of 70:",
        left: "Score",
        right: "70",
        context: "%",
        accepted: &[Symbol::GreaterOrEqual],
    },
];

const _: () = {
    let mut i = 0;
    while i < SCENARIOS.len() {
        assert!(!SCENARIOS[i].accepted.is_empty(), "scenario accepts no symbol");
        i += 1;
    }
};

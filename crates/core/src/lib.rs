#![forbid(unsafe_code)]

pub mod evaluator;
pub mod generator;
pub mod model;
pub mod time;

pub use time::Clock;

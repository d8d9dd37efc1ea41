//! The single-iteration engine and its configuration.

mod builder;
mod engine;
mod logging;
mod thresholds;
mod variables;

pub use builder::VariablesBuilder;
pub use engine::{Iteration, Winner};
pub use thresholds::Thresholds;
pub use variables::Variables;

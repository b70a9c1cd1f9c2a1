//! Execution ports

mod analyzer;
mod outcome;

pub use analyzer::{LanguageAnalyzer, Program};
pub use outcome::OutcomePolicy;

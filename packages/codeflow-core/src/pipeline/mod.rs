//! Composition of the features into one analysis run

mod analysis;

pub use analysis::{analyze_file, analyze_source, resolve_language, AnalysisRun, StepMode};

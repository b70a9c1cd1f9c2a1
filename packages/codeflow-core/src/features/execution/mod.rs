//! Simulated execution
//!
//! Steps through a source one node (Python) or one line (everything else)
//! at a time, drawing a synthetic success/fault outcome for each step. No
//! code is actually run.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{DebugInfo, Debugger, EnginePhase};
pub use domain::{
    ErrorInfo, ExecutionState, ExecutionStep, LineState, LineStatus, StepOutcome, StepVerdict,
    TimelineEntry,
};
pub use infrastructure::{analyzer_for, LineBasedSimulator, NativeAstAnalyzer, RandomOutcome};
pub use ports::{LanguageAnalyzer, OutcomePolicy, Program};

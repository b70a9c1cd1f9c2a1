//! CodeFlow core
//!
//! Structural extraction and simulated step-by-step execution of source
//! files, with a linear flow graph and JSON/HTML export.
//!
//! # Modules
//! - `features::parsing`: tree-sitter Python parsing and source discovery
//! - `features::extraction`: variables, functions, classes, conditionals, loops
//! - `features::execution`: the `Debugger` and its per-language analyzers
//! - `features::flow_graph`: petgraph path graph over executed steps
//! - `features::export`: JSON bundle and HTML report
//! - `pipeline`: one-call analysis used by the `codeflow` binary
//!
//! Sessions are persisted through `codeflow-storage`.

pub mod config;
pub mod errors;
pub mod features;
pub mod pipeline;
pub mod shared;

pub use config::{ConfigError, DebuggerConfig};
pub use errors::{CodeflowError, Result};
pub use features::execution::{Debugger, EnginePhase, StepOutcome};
pub use features::extraction::{AnalysisResults, StructuralExtractor};
pub use features::flow_graph::{FlowGraph, FlowGraphBuilder, GraphData};
pub use pipeline::{analyze_file, analyze_source, AnalysisRun, StepMode};
pub use shared::models::LanguageId;

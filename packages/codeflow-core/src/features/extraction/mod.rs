//! Structural extraction
//!
//! Lightweight facts about a Python source (assignments, definitions,
//! conditionals, loops) read directly off the tree-sitter syntax tree.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::StructuralExtractor;
pub use domain::{
    AnalysisResults, ClassRecord, ConditionalKind, ConditionalRecord, FunctionRecord, LoopKind,
    LoopRecord, Operation, RenderError, SourceArtifact, TruncationCaps, VariableRecord,
};

//! Extraction domain models

mod records;
mod render;

pub use records::{
    AnalysisResults, ClassRecord, ConditionalKind, ConditionalRecord, FunctionRecord, LoopKind,
    LoopRecord, Operation, SourceArtifact, VariableRecord,
};
pub use render::{render_or_unknown, truncate, RenderError, TruncationCaps};

//! Execution domain models

mod state;
mod step;

pub use state::{
    ErrorInfo, ExecutionState, LineState, LineStatus, StepOutcome, StepVerdict, TimelineEntry,
    PENDING_MESSAGE,
};
pub use step::ExecutionStep;

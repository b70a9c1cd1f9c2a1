mod debugger;

pub use debugger::{DebugInfo, Debugger, EnginePhase};

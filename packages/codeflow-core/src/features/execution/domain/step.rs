//! Execution step

use serde::{Deserialize, Serialize};

/// One simulated unit of execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStep {
    /// 1-based source line
    pub line: usize,
    /// Node kind (`expression_statement`, ...) or `Statement` on the line path
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub filename: String,
}

impl ExecutionStep {
    pub fn new(line: usize, kind: impl Into<String>, filename: impl Into<String>) -> Self {
        let kind = kind.into();
        Self {
            description: format!("Executing {} at line {}", kind, line),
            line,
            kind,
            filename: filename.into(),
        }
    }

    /// A whole-line step of the line-based simulation
    pub fn statement(line: usize, filename: impl Into<String>) -> Self {
        Self {
            line,
            kind: "Statement".to_string(),
            description: format!("Executing statement at line {}", line),
            filename: filename.into(),
        }
    }
}

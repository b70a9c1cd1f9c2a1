//! Execution state and its transitions
//!
//! `ExecutionState` is a plain value. Every transition consumes the old
//! value and returns the new one; the outcome of a step is decided by a
//! caller-supplied judge so no randomness lives here.
//!
//! The cursor starts *before* the first step: the first `step_forward`
//! executes step 0, and `cursor()` reports 0 until then.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::step::ExecutionStep;

pub const PENDING_MESSAGE: &str = "Not executed yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    Pending,
    Success,
    Error,
}

/// Latest outcome recorded for a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineState {
    pub status: LineStatus,
    pub message: String,
    pub filename: String,
}

impl LineState {
    pub fn pending(filename: impl Into<String>) -> Self {
        Self {
            status: LineStatus::Pending,
            message: PENDING_MESSAGE.to_string(),
            filename: filename.into(),
        }
    }
}

/// Snapshot of the single error slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub has_error: bool,
    pub line: Option<usize>,
    pub message: String,
    pub filename: String,
}

/// How a step turned out, as decided by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepVerdict {
    Success,
    Fault(String),
}

/// Result of a forward step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Executed {
        index: usize,
        line: usize,
        status: LineStatus,
        message: String,
    },
    /// Last step already executed (or no steps); nothing changed
    Finished,
}

impl StepOutcome {
    pub fn is_executed(&self) -> bool {
        matches!(self, StepOutcome::Executed { .. })
    }
}

/// One row of the execution timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub index: usize,
    pub step: ExecutionStep,
    pub status: LineStatus,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Fault {
    line: usize,
    message: String,
}

/// Cursor, per-line outcomes, visited lines and the error slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionState {
    steps: Vec<ExecutionStep>,
    filename: String,
    position: Option<usize>,
    line_states: BTreeMap<usize, LineState>,
    flow: Vec<usize>,
    fault: Option<Fault>,
}

impl ExecutionState {
    pub fn new(steps: Vec<ExecutionStep>, filename: impl Into<String>) -> Self {
        Self {
            steps,
            filename: filename.into(),
            ..Self::default()
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Transitions
    // ═══════════════════════════════════════════════════════════════════════

    /// Execute the next step, asking `judge` for its outcome
    pub fn step_forward<F>(mut self, judge: F) -> (Self, StepOutcome)
    where
        F: FnOnce(&ExecutionStep) -> StepVerdict,
    {
        let next = self.position.map_or(0, |p| p + 1);
        let Some(step) = self.steps.get(next) else {
            return (self, StepOutcome::Finished);
        };

        let line = step.line;
        let verdict = judge(step);
        self.position = Some(next);
        if self.flow.last() != Some(&line) {
            self.flow.push(line);
        }

        let (status, message) = match verdict {
            StepVerdict::Success => (
                LineStatus::Success,
                format!("Executed successfully at line {}", line),
            ),
            StepVerdict::Fault(message) => {
                self.fault = Some(Fault {
                    line,
                    message: message.clone(),
                });
                (LineStatus::Error, message)
            }
        };

        self.line_states.insert(
            line,
            LineState {
                status,
                message: message.clone(),
                filename: self.filename.clone(),
            },
        );

        let outcome = StepOutcome::Executed {
            index: next,
            line,
            status,
            message,
        };
        (self, outcome)
    }

    /// Move the cursor back one step
    ///
    /// Only the cursor moves; line outcomes, flow and the error slot keep
    /// what later steps recorded.
    pub fn step_back(mut self) -> (Self, bool) {
        match self.position {
            Some(p) if p > 0 => {
                self.position = Some(p - 1);
                (self, true)
            }
            _ => (self, false),
        }
    }

    /// Back to before the first step; steps are kept
    pub fn reset(self) -> Self {
        Self::new(self.steps, self.filename)
    }

    /// Record an error that did not come from a step (parse failures)
    pub fn with_fault(mut self, line: usize, message: impl Into<String>) -> Self {
        self.fault = Some(Fault {
            line,
            message: message.into(),
        });
        self
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════════

    pub fn steps(&self) -> &[ExecutionStep] {
        &self.steps
    }

    pub fn cursor(&self) -> usize {
        self.position.unwrap_or(0)
    }

    /// Whether the last step has been executed
    pub fn is_finished(&self) -> bool {
        let next = self.position.map_or(0, |p| p + 1);
        next >= self.steps.len()
    }

    pub fn line_state(&self, line: usize) -> LineState {
        self.line_states
            .get(&line)
            .cloned()
            .unwrap_or_else(|| LineState::pending(self.filename.clone()))
    }

    pub fn line_states(&self) -> &BTreeMap<usize, LineState> {
        &self.line_states
    }

    pub fn execution_flow(&self) -> &[usize] {
        &self.flow
    }

    pub fn has_error(&self) -> bool {
        self.fault.is_some()
    }

    pub fn error_info(&self) -> ErrorInfo {
        ErrorInfo {
            has_error: self.fault.is_some(),
            line: self.fault.as_ref().map(|f| f.line),
            message: self
                .fault
                .as_ref()
                .map(|f| f.message.clone())
                .unwrap_or_default(),
            filename: self.filename.clone(),
        }
    }

    /// Steps up to and including the cursor; empty before the first step
    pub fn timeline(&self) -> Vec<TimelineEntry> {
        let Some(position) = self.position else {
            return Vec::new();
        };
        self.steps
            .iter()
            .take(position + 1)
            .enumerate()
            .map(|(index, step)| TimelineEntry {
                index,
                step: step.clone(),
                status: self.line_state(step.line).status,
                is_current: index == position,
            })
            .collect()
    }
}

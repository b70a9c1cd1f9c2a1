//! Debugger facade
//!
//! Owns one source text, its analyzer and the latest `ExecutionState`.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut debugger = Debugger::new(source, "main.py", LanguageId::Python, &config);
//! debugger.parse()?;
//! debugger.initialize_steps()?;
//! while debugger.step_forward().is_executed() {}
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::config::DebuggerConfig;
use crate::errors::{CodeflowError, Result};
use crate::features::execution::domain::{
    ErrorInfo, ExecutionState, ExecutionStep, LineState, StepOutcome, StepVerdict, TimelineEntry,
};
use crate::features::execution::infrastructure::{analyzer_for, RandomOutcome};
use crate::features::execution::ports::{LanguageAnalyzer, OutcomePolicy, Program};
use crate::features::parsing::SyntaxFailure;
use crate::shared::constants::FLOW_TAIL_LEN;
use crate::shared::models::LanguageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnginePhase {
    Uninitialized,
    Parsed,
    Stepping,
    Errored,
}

/// Summary shown next to the stepping controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub language: LanguageId,
    pub filename: String,
    pub phase: EnginePhase,
    pub cursor: usize,
    pub total_steps: usize,
    pub breakpoints: usize,
    pub flow_length: usize,
    pub recent_flow: Vec<usize>,
    pub error: ErrorInfo,
}

#[derive(Debug)]
pub struct Debugger {
    analyzer: Box<dyn LanguageAnalyzer>,
    outcomes: Box<dyn OutcomePolicy>,
    source: String,
    filename: String,
    program: Option<Program>,
    initialized: bool,
    state: ExecutionState,
    breakpoints: BTreeSet<usize>,
}

impl Debugger {
    /// Debugger with the analyzer for `language` and a random outcome policy
    pub fn new(
        source: impl Into<String>,
        filename: impl Into<String>,
        language: LanguageId,
        config: &DebuggerConfig,
    ) -> Self {
        Self::with_parts(
            source,
            filename,
            analyzer_for(language),
            Box::new(RandomOutcome::new(config.error_probability, config.seed)),
        )
    }

    pub fn with_parts(
        source: impl Into<String>,
        filename: impl Into<String>,
        analyzer: Box<dyn LanguageAnalyzer>,
        outcomes: Box<dyn OutcomePolicy>,
    ) -> Self {
        let filename = filename.into();
        Self {
            analyzer,
            outcomes,
            source: source.into(),
            state: ExecutionState::new(Vec::new(), filename.clone()),
            filename,
            program: None,
            initialized: false,
            breakpoints: BTreeSet::new(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Lifecycle
    // ═══════════════════════════════════════════════════════════════════════

    /// Parse the source; a failure is recorded in the error slot
    pub fn parse(&mut self) -> std::result::Result<(), SyntaxFailure> {
        match self.analyzer.parse(&self.source) {
            Ok(program) => {
                debug!(language = %self.analyzer.language(), filename = %self.filename, "source parsed");
                self.program = Some(program);
                Ok(())
            }
            Err(failure) => {
                warn!(filename = %self.filename, line = failure.line, message = %failure.message, "syntax failure");
                self.program = None;
                self.initialized = false;
                self.state = ExecutionState::new(Vec::new(), self.filename.clone())
                    .with_fault(failure.line, failure.message.clone());
                Err(failure)
            }
        }
    }

    /// Derive the step list, replacing any previous one
    pub fn initialize_steps(&mut self) -> Result<usize> {
        let Some(program) = &self.program else {
            return Err(CodeflowError::analysis(
                "source must be parsed successfully before steps are initialized",
            ));
        };

        let steps = self.analyzer.derive_steps(program, &self.filename);
        let count = steps.len();
        self.state = ExecutionState::new(steps, self.filename.clone());
        self.initialized = true;

        info!(filename = %self.filename, steps = count, "execution steps initialized");
        Ok(count)
    }

    /// Execute the next step; `Finished` once the last step has run
    pub fn step_forward(&mut self) -> StepOutcome {
        if !self.initialized {
            return StepOutcome::Finished;
        }

        let analyzer = &self.analyzer;
        let outcomes = &mut self.outcomes;
        let state = std::mem::take(&mut self.state);
        let (state, outcome) = state.step_forward(|step| {
            if outcomes.is_fault() {
                StepVerdict::Fault(analyzer.fault_message(step.line))
            } else {
                StepVerdict::Success
            }
        });
        self.state = state;

        if let StepOutcome::Executed { index, line, status, .. } = &outcome {
            debug!(index, line, ?status, "step executed");
        }
        outcome
    }

    /// Move the cursor back one step; false at the first step
    pub fn step_back(&mut self) -> bool {
        let (state, moved) = std::mem::take(&mut self.state).step_back();
        self.state = state;
        moved
    }

    /// Step forward until nothing is left; returns the number of steps run
    pub fn run_to_end(&mut self) -> usize {
        let mut executed = 0;
        while self.step_forward().is_executed() {
            executed += 1;
        }
        debug!(executed, "ran to end");
        executed
    }

    /// Clear outcomes, flow and the error slot; steps are kept
    pub fn reset(&mut self) {
        self.state = std::mem::take(&mut self.state).reset();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Breakpoints
    // ═══════════════════════════════════════════════════════════════════════

    pub fn set_breakpoint(&mut self, line: usize) -> bool {
        self.breakpoints.insert(line)
    }

    pub fn remove_breakpoint(&mut self, line: usize) -> bool {
        self.breakpoints.remove(&line)
    }

    /// Recorded breakpoint lines; stepping never consults them
    pub fn breakpoints(&self) -> &BTreeSet<usize> {
        &self.breakpoints
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn phase(&self) -> EnginePhase {
        if self.state.has_error() {
            EnginePhase::Errored
        } else if self.initialized {
            EnginePhase::Stepping
        } else if self.program.is_some() {
            EnginePhase::Parsed
        } else {
            EnginePhase::Uninitialized
        }
    }

    pub fn language(&self) -> LanguageId {
        self.analyzer.language()
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn program(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    pub fn state(&self) -> &ExecutionState {
        &self.state
    }

    pub fn steps(&self) -> &[ExecutionStep] {
        self.state.steps()
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    pub fn line_state(&self, line: usize) -> LineState {
        self.state.line_state(line)
    }

    pub fn error_info(&self) -> ErrorInfo {
        self.state.error_info()
    }

    pub fn execution_flow(&self) -> &[usize] {
        self.state.execution_flow()
    }

    pub fn timeline(&self) -> Vec<TimelineEntry> {
        self.state.timeline()
    }

    /// Variable values at the cursor; no real state is tracked
    pub fn current_variables(&self) -> Map<String, Value> {
        Map::new()
    }

    pub fn debug_info(&self) -> DebugInfo {
        let flow = self.state.execution_flow();
        let tail_start = flow.len().saturating_sub(FLOW_TAIL_LEN);
        DebugInfo {
            language: self.language(),
            filename: self.filename.clone(),
            phase: self.phase(),
            cursor: self.cursor(),
            total_steps: self.steps().len(),
            breakpoints: self.breakpoints.len(),
            flow_length: flow.len(),
            recent_flow: flow[tail_start..].to_vec(),
            error: self.error_info(),
        }
    }
}

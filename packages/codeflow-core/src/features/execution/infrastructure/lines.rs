//! Line-based simulator for languages without a parser
//!
//! Parsing always succeeds; every non-blank line becomes one step.

use crate::features::execution::domain::ExecutionStep;
use crate::features::execution::ports::{LanguageAnalyzer, Program};
use crate::features::parsing::SyntaxFailure;
use crate::shared::models::LanguageId;

#[derive(Debug, Clone, Copy)]
pub struct LineBasedSimulator {
    language: LanguageId,
}

impl LineBasedSimulator {
    pub fn new(language: LanguageId) -> Self {
        Self { language }
    }
}

impl LanguageAnalyzer for LineBasedSimulator {
    fn language(&self) -> LanguageId {
        self.language
    }

    fn parse(&self, source: &str) -> Result<Program, SyntaxFailure> {
        Ok(Program::Lines(source.to_string()))
    }

    fn derive_steps(&self, program: &Program, filename: &str) -> Vec<ExecutionStep> {
        program
            .source()
            .split('\n')
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(idx, _)| ExecutionStep::statement(idx + 1, filename))
            .collect()
    }

    fn fault_message(&self, line: usize) -> String {
        format!("Runtime error at line {}: Execution failed", line)
    }
}

//! Language analyzer port
//!
//! Per-language behaviour of a debug session: how source is parsed, how
//! steps are derived from it, and how a synthetic fault is worded. Chosen
//! once per session by [`analyzer_for`](crate::features::execution::infrastructure::analyzer_for).

use std::fmt::Debug;

use crate::features::execution::domain::ExecutionStep;
use crate::features::parsing::{ParsedSource, SyntaxFailure};
use crate::shared::models::LanguageId;

/// Source accepted by an analyzer
#[derive(Debug, Clone)]
pub enum Program {
    /// Real syntax tree
    Native(ParsedSource),
    /// Raw text, stepped line by line
    Lines(String),
}

impl Program {
    /// Syntax tree, when the language has one
    pub fn parsed(&self) -> Option<&ParsedSource> {
        match self {
            Program::Native(parsed) => Some(parsed),
            Program::Lines(_) => None,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Program::Native(parsed) => parsed.source(),
            Program::Lines(text) => text,
        }
    }
}

pub trait LanguageAnalyzer: Debug + Send + Sync {
    fn language(&self) -> LanguageId;

    /// Accept or reject source text
    fn parse(&self, source: &str) -> Result<Program, SyntaxFailure>;

    /// Steps for a parsed program, in execution order
    fn derive_steps(&self, program: &Program, filename: &str) -> Vec<ExecutionStep>;

    /// Message recorded when a step at `line` draws a synthetic fault
    fn fault_message(&self, line: usize) -> String;
}

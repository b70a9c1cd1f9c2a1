//! Structural extractor
//!
//! Runs every category extractor over one parsed source. Categories are
//! independent: a failing category is logged and left empty.

use tracing::{debug, warn};

use crate::config::DebuggerConfig;
use crate::features::extraction::domain::{
    AnalysisResults, ClassRecord, ConditionalRecord, FunctionRecord, LoopRecord, RenderError,
    TruncationCaps, VariableRecord,
};
use crate::features::extraction::infrastructure as extract;
use crate::features::parsing::{ParsedSource, PythonParser, SyntaxFailure};

/// Extracts variables, functions, classes, conditionals and loops
#[derive(Debug, Default, Clone)]
pub struct StructuralExtractor {
    caps: TruncationCaps,
    results: AnalysisResults,
}

impl StructuralExtractor {
    pub fn new(caps: TruncationCaps) -> Self {
        Self {
            caps,
            results: AnalysisResults::default(),
        }
    }

    pub fn from_config(config: &DebuggerConfig) -> Self {
        Self::new(TruncationCaps {
            value: config.value_truncate,
            target: config.target_truncate,
        })
    }

    /// Parse and analyze Python text
    ///
    /// A syntax failure leaves the previous results untouched.
    pub fn analyze_source(&mut self, source: &str) -> Result<&AnalysisResults, SyntaxFailure> {
        let parsed = PythonParser::new().parse(source)?;
        Ok(self.analyze(&parsed))
    }

    /// Analyze an already parsed source, replacing previous results
    pub fn analyze(&mut self, parsed: &ParsedSource) -> &AnalysisResults {
        self.results = AnalysisResults {
            variables: self.extract_variables(parsed),
            functions: self.extract_functions(parsed),
            classes: self.extract_classes(parsed),
            conditionals: self.extract_conditionals(parsed),
            loops: self.extract_loops(parsed),
        };

        debug!(
            variables = self.results.variables.len(),
            functions = self.results.functions.len(),
            classes = self.results.classes.len(),
            conditionals = self.results.conditionals.len(),
            loops = self.results.loops.len(),
            "structural extraction complete"
        );
        &self.results
    }

    /// Results of the latest analysis
    pub fn get_results(&self) -> &AnalysisResults {
        &self.results
    }

    pub fn into_results(self) -> AnalysisResults {
        self.results
    }

    pub fn extract_variables(&self, parsed: &ParsedSource) -> Vec<VariableRecord> {
        best_effort("variables", extract::extract_variables(parsed, self.caps.value))
    }

    pub fn extract_functions(&self, parsed: &ParsedSource) -> Vec<FunctionRecord> {
        best_effort("functions", extract::extract_functions(parsed))
    }

    pub fn extract_classes(&self, parsed: &ParsedSource) -> Vec<ClassRecord> {
        best_effort("classes", extract::extract_classes(parsed))
    }

    pub fn extract_conditionals(&self, parsed: &ParsedSource) -> Vec<ConditionalRecord> {
        extract::extract_conditionals(parsed, self.caps.value)
    }

    pub fn extract_loops(&self, parsed: &ParsedSource) -> Vec<LoopRecord> {
        extract::extract_loops(parsed, self.caps)
    }
}

fn best_effort<T>(category: &str, outcome: Result<Vec<T>, RenderError>) -> Vec<T> {
    outcome.unwrap_or_else(|error| {
        warn!(category, %error, "extraction failed, category left empty");
        Vec::new()
    })
}

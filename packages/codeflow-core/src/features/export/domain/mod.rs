//! Export payloads

use codeflow_storage::Session;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::features::execution::domain::ExecutionStep;
use crate::features::extraction::domain::{
    AnalysisResults, ClassRecord, FunctionRecord, VariableRecord,
};

/// Structured export: session fields carried verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub filename: String,
    pub code: String,
    pub analysis_results: Value,
    pub execution_steps: Value,
    pub variables_state: Value,
    pub flow_graph: Value,
}

impl ExportBundle {
    pub fn from_session(session: &Session) -> Self {
        Self {
            filename: session.filename.clone(),
            code: session.code.clone(),
            analysis_results: session.analysis_results.clone(),
            execution_steps: session.execution_steps.clone(),
            variables_state: session.variables_state.clone(),
            flow_graph: session.flow_graph.clone(),
        }
    }
}

impl Default for ExportBundle {
    fn default() -> Self {
        Self {
            filename: String::new(),
            code: String::new(),
            analysis_results: json!({}),
            execution_steps: json!([]),
            variables_state: json!({}),
            flow_graph: json!({}),
        }
    }
}

/// Report export: the tables of the HTML report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportData {
    pub filename: String,
    pub code: String,
    pub variables: Vec<VariableRecord>,
    pub functions: Vec<FunctionRecord>,
    pub classes: Vec<ClassRecord>,
    pub execution_steps: Vec<ExecutionStep>,
}

impl ReportData {
    pub fn new(
        filename: impl Into<String>,
        code: impl Into<String>,
        results: &AnalysisResults,
        steps: &[ExecutionStep],
    ) -> Self {
        Self {
            filename: filename.into(),
            code: code.into(),
            variables: results.variables.clone(),
            functions: results.functions.clone(),
            classes: results.classes.clone(),
            execution_steps: steps.to_vec(),
        }
    }

    /// Report for a stored session; unreadable blobs give empty tables
    pub fn from_session(session: &Session) -> Self {
        let results = serde_json::from_value::<AnalysisResults>(session.analysis_results.clone())
            .unwrap_or_else(|error| {
                warn!(session = session.id, %error, "analysis results not readable, report tables left empty");
                AnalysisResults::default()
            });
        let steps = serde_json::from_value::<Vec<ExecutionStep>>(session.execution_steps.clone())
            .unwrap_or_else(|error| {
                warn!(session = session.id, %error, "execution steps not readable, report table left empty");
                Vec::new()
            });

        Self::new(&session.filename, &session.code, &results, &steps)
    }
}

//! Analysis run
//!
//! extract (Python only) → initialize steps → step / run → timeline graph.
//! The resulting [`AnalysisRun`] is what gets saved, exported and reported.

use std::path::Path;

use codeflow_storage::NewSession;
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::config::DebuggerConfig;
use crate::errors::Result;
use crate::features::execution::{DebugInfo, Debugger, ExecutionStep, TimelineEntry};
use crate::features::export::{ExportBundle, ReportData};
use crate::features::extraction::{AnalysisResults, StructuralExtractor};
use crate::features::flow_graph::{FlowGraphBuilder, GraphData};
use crate::shared::constants::DEFAULT_FILENAME;
use crate::shared::models::LanguageId;

/// How far to drive the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepMode {
    /// Initialize steps only
    #[default]
    Initialize,
    /// Step forward at most `n` times
    Steps(usize),
    /// Step until the last step has run
    RunToEnd,
}

/// Everything produced by analyzing one source text
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    pub filename: String,
    pub language: LanguageId,
    pub code: String,
    pub results: AnalysisResults,
    pub steps: Vec<ExecutionStep>,
    pub timeline: Vec<TimelineEntry>,
    pub flow_graph: GraphData,
    pub variables_state: Map<String, Value>,
    pub debug_info: DebugInfo,
}

impl AnalysisRun {
    /// Session record for the store
    pub fn to_new_session(&self) -> Result<NewSession> {
        Ok(NewSession::new(&self.filename, &self.code)
            .with_analysis_results(serde_json::to_value(&self.results)?)
            .with_execution_steps(serde_json::to_value(&self.steps)?)
            .with_variables_state(Value::Object(self.variables_state.clone()))
            .with_flow_graph(serde_json::to_value(&self.flow_graph)?))
    }

    pub fn export_bundle(&self) -> Result<ExportBundle> {
        Ok(ExportBundle {
            filename: self.filename.clone(),
            code: self.code.clone(),
            analysis_results: serde_json::to_value(&self.results)?,
            execution_steps: serde_json::to_value(&self.steps)?,
            variables_state: Value::Object(self.variables_state.clone()),
            flow_graph: serde_json::to_value(&self.flow_graph)?,
        })
    }

    pub fn report(&self) -> ReportData {
        ReportData::new(&self.filename, &self.code, &self.results, &self.steps)
    }
}

/// Analyze source text already in memory
///
/// A Python syntax failure is returned as `CodeflowError::Parse`.
#[instrument(skip(code, config), fields(code_len = code.len()))]
pub fn analyze_source(
    code: &str,
    filename: &str,
    language: LanguageId,
    mode: StepMode,
    config: &DebuggerConfig,
) -> Result<AnalysisRun> {
    let mut debugger = Debugger::new(code, filename, language, config);
    debugger.parse()?;

    let results = match debugger.program().and_then(|program| program.parsed()) {
        Some(parsed) => {
            let mut extractor = StructuralExtractor::from_config(config);
            extractor.analyze(parsed);
            extractor.into_results()
        }
        None => AnalysisResults::default(),
    };

    debugger.initialize_steps()?;
    match mode {
        StepMode::Initialize => {}
        StepMode::Steps(n) => {
            for _ in 0..n {
                if !debugger.step_forward().is_executed() {
                    break;
                }
            }
        }
        StepMode::RunToEnd => {
            debugger.run_to_end();
        }
    }

    let timeline = debugger.timeline();
    let flow_graph = FlowGraphBuilder::new()
        .build_from_timeline(&timeline)
        .graph_data();

    info!(
        steps = debugger.steps().len(),
        executed = timeline.len(),
        has_error = debugger.error_info().has_error,
        "analysis complete"
    );

    Ok(AnalysisRun {
        filename: filename.to_string(),
        language,
        code: code.to_string(),
        results,
        steps: debugger.steps().to_vec(),
        timeline,
        flow_graph,
        variables_state: debugger.current_variables(),
        debug_info: debugger.debug_info(),
    })
}

/// Read and analyze a file; the stored filename is its base name
pub fn analyze_file(
    path: &Path,
    language: Option<LanguageId>,
    mode: StepMode,
    config: &DebuggerConfig,
) -> Result<AnalysisRun> {
    let code = std::fs::read_to_string(path)?;
    let language = language.unwrap_or_else(|| resolve_language(path, config));
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_FILENAME);

    analyze_source(&code, filename, language, mode, config)
}

/// Extension decides; files without one fall back to the configured default
pub fn resolve_language(path: &Path, config: &DebuggerConfig) -> LanguageId {
    LanguageId::from_path(path).unwrap_or(config.default_language)
}

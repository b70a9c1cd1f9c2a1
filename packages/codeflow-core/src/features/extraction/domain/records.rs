//! Structural records
//!
//! Flat, immutable descriptions of what the extractor found. Field names
//! follow the persisted/exported JSON shape (`type` for the kind tags).

use serde::{Deserialize, Serialize};

/// Plain-name assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub name: String,
    pub line: usize,
    /// Truncated dump of the assigned expression
    pub value: String,
}

/// Function definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    pub line: usize,
    /// Positional parameter names, in order
    pub params: Vec<String>,
    /// Never inferred; kept for shape compatibility
    pub returns: Option<String>,
}

/// Class definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    pub line: usize,
    /// Immediate function definitions of the class body
    pub methods: Vec<String>,
    /// Immediate plain-name assignment targets of the class body
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionalKind {
    If,
}

/// `if` statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalRecord {
    pub line: usize,
    #[serde(rename = "type")]
    pub kind: ConditionalKind,
    /// Truncated dump of the test expression
    pub test: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopKind {
    For,
    While,
}

/// `for` / `while` loop
///
/// Exactly one of `target` (for) and `test` (while) is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopRecord {
    pub line: usize,
    #[serde(rename = "type")]
    pub kind: LoopKind,
    pub target: Option<String>,
    pub test: Option<String>,
}

/// Any single extracted fact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceArtifact {
    Variable(VariableRecord),
    Function(FunctionRecord),
    Class(ClassRecord),
    Conditional(ConditionalRecord),
    Loop(LoopRecord),
}

impl SourceArtifact {
    pub fn line(&self) -> usize {
        match self {
            SourceArtifact::Variable(r) => r.line,
            SourceArtifact::Function(r) => r.line,
            SourceArtifact::Class(r) => r.line,
            SourceArtifact::Conditional(r) => r.line,
            SourceArtifact::Loop(r) => r.line,
        }
    }

    /// Operation label used by operation listings
    pub fn operation_kind(&self) -> &'static str {
        match self {
            SourceArtifact::Variable(_) => "variable assignment",
            SourceArtifact::Function(_) => "function definition",
            SourceArtifact::Class(_) => "class definition",
            SourceArtifact::Conditional(_) => "conditional",
            SourceArtifact::Loop(_) => "loop",
        }
    }
}

/// One entry of an operation listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "type")]
    pub kind: String,
    pub line: usize,
}

/// Everything extracted from one source text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResults {
    #[serde(default)]
    pub variables: Vec<VariableRecord>,
    #[serde(default)]
    pub functions: Vec<FunctionRecord>,
    #[serde(default)]
    pub classes: Vec<ClassRecord>,
    #[serde(default)]
    pub conditionals: Vec<ConditionalRecord>,
    #[serde(default)]
    pub loops: Vec<LoopRecord>,
}

impl AnalysisResults {
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
            && self.functions.is_empty()
            && self.classes.is_empty()
            && self.conditionals.is_empty()
            && self.loops.is_empty()
    }

    /// All records as artifacts, category by category
    pub fn artifacts(&self) -> Vec<SourceArtifact> {
        let variables = self.variables.iter().cloned().map(SourceArtifact::Variable);
        let functions = self.functions.iter().cloned().map(SourceArtifact::Function);
        let classes = self.classes.iter().cloned().map(SourceArtifact::Class);
        let conditionals = self
            .conditionals
            .iter()
            .cloned()
            .map(SourceArtifact::Conditional);
        let loops = self.loops.iter().cloned().map(SourceArtifact::Loop);

        variables
            .chain(functions)
            .chain(classes)
            .chain(conditionals)
            .chain(loops)
            .collect()
    }

    /// Debuggable operations sorted by line (stable across categories)
    pub fn operations(&self) -> Vec<Operation> {
        let mut operations: Vec<Operation> = self
            .artifacts()
            .iter()
            .map(|artifact| Operation {
                kind: artifact.operation_kind().to_string(),
                line: artifact.line(),
            })
            .collect();
        operations.sort_by_key(|op| op.line);
        operations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> AnalysisResults {
        AnalysisResults {
            variables: vec![VariableRecord {
                name: "x".to_string(),
                line: 5,
                value: "integer(10)".to_string(),
            }],
            functions: vec![FunctionRecord {
                name: "f".to_string(),
                line: 1,
                params: vec!["n".to_string()],
                returns: None,
            }],
            classes: vec![],
            conditionals: vec![ConditionalRecord {
                line: 2,
                kind: ConditionalKind::If,
                test: "comparison_operator(identifier(n), '<=', integer(1))".to_string(),
            }],
            loops: vec![LoopRecord {
                line: 7,
                kind: LoopKind::For,
                target: Some("identifier(i)".to_string()),
                test: None,
            }],
        }
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["functions"][0]["returns"], json!(null));
        assert_eq!(value["conditionals"][0]["type"], json!("if"));
        assert_eq!(value["loops"][0]["type"], json!("for"));
        assert_eq!(value["loops"][0]["test"], json!(null));
    }

    #[test]
    fn test_operations_sorted_by_line() {
        let ops = sample().operations();
        let lines: Vec<usize> = ops.iter().map(|op| op.line).collect();
        assert_eq!(lines, vec![1, 2, 5, 7]);
        assert_eq!(ops[0].kind, "function definition");
        assert_eq!(ops[3].kind, "loop");
    }

    #[test]
    fn test_missing_categories_deserialize_empty() {
        let results: AnalysisResults = serde_json::from_value(json!({"variables": []})).unwrap();
        assert!(results.is_empty());
    }
}

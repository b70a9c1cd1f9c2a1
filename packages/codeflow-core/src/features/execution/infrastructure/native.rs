//! Syntax-tree backed analyzer (Python)

use tracing::{debug, warn};

use crate::features::execution::domain::ExecutionStep;
use crate::features::execution::ports::{LanguageAnalyzer, Program};
use crate::features::parsing::{PythonParser, SyntaxFailure};
use crate::shared::models::LanguageId;
use crate::shared::utils::tree_sitter::{node_line, walk_breadth_first};

/// One step per named syntax node, ordered by line
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeAstAnalyzer {
    parser: PythonParser,
}

impl NativeAstAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LanguageAnalyzer for NativeAstAnalyzer {
    fn language(&self) -> LanguageId {
        LanguageId::Python
    }

    fn parse(&self, source: &str) -> Result<Program, SyntaxFailure> {
        self.parser.parse(source).map(Program::Native)
    }

    fn derive_steps(&self, program: &Program, filename: &str) -> Vec<ExecutionStep> {
        let Some(parsed) = program.parsed() else {
            warn!("native analyzer given an unparsed program, no steps derived");
            return Vec::new();
        };

        let mut steps: Vec<ExecutionStep> = walk_breadth_first(parsed.root())
            .into_iter()
            .skip(1)
            .map(|node| ExecutionStep::new(node_line(node), node.kind(), filename))
            .collect();
        // Stable: nodes on one line keep breadth-first order
        steps.sort_by_key(|step| step.line);

        debug!(steps = steps.len(), %filename, "native steps derived");
        steps
    }

    fn fault_message(&self, line: usize) -> String {
        format!("Runtime error at line {}: Division by zero", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_sorted_and_root_excluded() {
        let analyzer = NativeAstAnalyzer::new();
        let program = analyzer
            .parse("def f(n):\n    return n\n# note\nx = f(1)\n")
            .unwrap();
        let steps = analyzer.derive_steps(&program, "main.py");

        assert!(!steps.is_empty());
        assert!(steps.iter().all(|s| s.kind != "module" && s.kind != "comment"));
        assert!(steps.windows(2).all(|w| w[0].line <= w[1].line));
        assert_eq!(steps[0].kind, "function_definition");
        assert_eq!(steps[0].description, "Executing function_definition at line 1");
        assert!(steps.iter().all(|s| s.filename == "main.py"));
    }

    #[test]
    fn test_same_line_keeps_walk_order() {
        let analyzer = NativeAstAnalyzer::new();
        let program = analyzer.parse("x = 1\n").unwrap();
        let kinds: Vec<String> = analyzer
            .derive_steps(&program, "main.py")
            .into_iter()
            .map(|s| s.kind)
            .collect();

        assert_eq!(
            kinds,
            vec!["expression_statement", "assignment", "identifier", "integer"]
        );
    }

    #[test]
    fn test_syntax_error_rejected() {
        let failure = NativeAstAnalyzer::new().parse("x = (\n").unwrap_err();
        assert!(failure.line >= 1);
    }

    #[test]
    fn test_fault_message() {
        assert_eq!(
            NativeAstAnalyzer::new().fault_message(9),
            "Runtime error at line 9: Division by zero"
        );
    }
}

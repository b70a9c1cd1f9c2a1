//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency is configured. Tree-sitter
//! recovers from syntax errors by inserting `ERROR`/`MISSING` nodes; any such
//! node makes the whole parse a `SyntaxFailure`.
//!
//! The grammar is also more permissive than Python 3 itself: it keeps the
//! Python 2 `print`/`exec` statements, takes any expression after `del`, and
//! leaves the indentation of sibling statements unchecked. A second pass over
//! an error-free tree rejects those constructs too.

use tree_sitter::{Node, Parser as TSParser};
use tracing::debug;

use crate::features::parsing::domain::{ParsedSource, SyntaxFailure};
use crate::shared::utils::tree_sitter::{children, named_children, node_line};

/// Tree-sitter based Python parser
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonParser;

impl PythonParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse Python source text
    pub fn parse(&self, source: &str) -> Result<ParsedSource, SyntaxFailure> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .map_err(|e| SyntaxFailure::new(1, format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| SyntaxFailure::new(1, "Failed to parse source code"))?;

        let root = tree.root_node();
        if root.has_error() {
            let failure = first_error(root).unwrap_or_else(|| SyntaxFailure::new(1, "invalid syntax"));
            debug!(line = failure.line, message = %failure.message, "python parse rejected");
            return Err(failure);
        }

        if let Some(failure) = first_rejected(root) {
            debug!(line = failure.line, message = %failure.message, "python parse rejected");
            return Err(failure);
        }

        Ok(ParsedSource::new(tree, source.to_string()))
    }
}

/// First `ERROR` or `MISSING` node in source order
fn first_error(node: Node<'_>) -> Option<SyntaxFailure> {
    if node.is_missing() {
        return Some(SyntaxFailure::new(
            node_line(node),
            format!("invalid syntax: expected '{}'", node.kind()),
        ));
    }
    if node.is_error() {
        return Some(SyntaxFailure::new(node_line(node), "invalid syntax"));
    }
    if !node.has_error() {
        return None;
    }
    children(node).into_iter().find_map(first_error)
}

/// Earliest construct the grammar accepts but Python 3 does not
fn first_rejected(root: Node<'_>) -> Option<SyntaxFailure> {
    let mut rejected = Vec::new();
    collect_rejected(root, &mut rejected);
    rejected.into_iter().min_by_key(|failure| failure.line)
}

fn collect_rejected(node: Node<'_>, out: &mut Vec<SyntaxFailure>) {
    match node.kind() {
        "print_statement" => out.push(SyntaxFailure::new(
            node_line(node),
            "Missing parentheses in call to 'print'",
        )),
        "exec_statement" => out.push(SyntaxFailure::new(
            node_line(node),
            "Missing parentheses in call to 'exec'",
        )),
        "delete_statement" => {
            if let Some(operand) = named_children(node)
                .into_iter()
                .find(|operand| !is_delete_target(*operand))
            {
                out.push(SyntaxFailure::new(
                    node_line(operand),
                    format!("cannot delete {}", operand.kind()),
                ));
            }
        }
        "module" | "block" => {
            if let Some(failure) = misaligned_statement(node) {
                out.push(failure);
            }
        }
        _ => {}
    }

    for child in named_children(node) {
        collect_rejected(child, out);
    }
}

/// Names, attributes, subscripts and groupings of those
fn is_delete_target(node: Node<'_>) -> bool {
    match node.kind() {
        "identifier" | "attribute" | "subscript" => true,
        "expression_list" | "tuple" | "list" | "parenthesized_expression" => {
            named_children(node).into_iter().all(is_delete_target)
        }
        _ => false,
    }
}

/// First statement of a suite that does not start at the suite's column
///
/// Statements sharing a line with their predecessor (`a = 1; b = 2`) are not
/// line starts and are skipped. Module-level statements start at column 0.
fn misaligned_statement(suite: Node<'_>) -> Option<SyntaxFailure> {
    let statements = named_children(suite);
    let first = statements.first()?;
    let column = if suite.kind() == "module" {
        0
    } else {
        first.start_position().column
    };

    let mut previous_end_row = None;
    for statement in statements {
        let start = statement.start_position();
        let starts_line = previous_end_row != Some(start.row);
        previous_end_row = Some(statement.end_position().row);

        if starts_line && start.column != column {
            let message = if start.column > column {
                "unexpected indent"
            } else {
                "unindent does not match any outer indentation level"
            };
            return Some(SyntaxFailure::new(start.row + 1, message));
        }
    }
    None
}

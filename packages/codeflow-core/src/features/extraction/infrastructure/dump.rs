//! Syntax dump
//!
//! Renders an expression subtree as `kind(child, child, ...)`. Literal and
//! name leaves render as `kind(text)`; operator tokens are kept quoted,
//! punctuation is dropped.
//!
//! ```text
//! n <= 1        => comparison_operator(identifier(n), '<=', integer(1))
//! foo(a, 2)     => call(identifier(foo), argument_list(identifier(a), integer(2)))
//! ```

use tree_sitter::Node;

use crate::features::extraction::domain::RenderError;
use crate::shared::constants::MAX_DUMP_DEPTH;
use crate::shared::utils::tree_sitter::{children, named_children, node_text};

/// Kinds rendered from their source text even when they have children
const LEAF_KINDS: &[&str] = &[
    "identifier",
    "integer",
    "float",
    "string",
    "true",
    "false",
    "none",
    "ellipsis",
];

const PUNCTUATION: &[&str] = &["(", ")", "[", "]", "{", "}", ",", ":", ".", ";"];

/// Render a node and its subtree
pub fn dump(node: Node<'_>, source: &str) -> Result<String, RenderError> {
    dump_at(node, source, 0)
}

fn dump_at(node: Node<'_>, source: &str, depth: usize) -> Result<String, RenderError> {
    if depth > MAX_DUMP_DEPTH {
        return Err(RenderError::TooDeep {
            limit: MAX_DUMP_DEPTH,
        });
    }

    let kind = node.kind();
    if LEAF_KINDS.contains(&kind) || named_children(node).is_empty() {
        return Ok(format!("{}({})", kind, node_text(node, source)?));
    }

    let mut parts = Vec::new();
    for child in children(node) {
        if child.is_extra() {
            continue;
        }
        if child.is_named() {
            parts.push(dump_at(child, source, depth + 1)?);
        } else if !PUNCTUATION.contains(&child.kind()) {
            parts.push(format!("'{}'", node_text(child, source)?));
        }
    }

    Ok(format!("{}({})", kind, parts.join(", ")))
}

/// Child behind a grammar field, or a render error naming it
pub fn required_field<'tree>(
    node: Node<'tree>,
    field: &'static str,
) -> Result<Node<'tree>, RenderError> {
    node.child_by_field_name(field)
        .ok_or_else(|| RenderError::MissingField {
            kind: node.kind().to_string(),
            field,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::PythonParser;
    use crate::shared::utils::tree_sitter::walk_breadth_first;

    fn dump_first(code: &str, kind: &str) -> String {
        let parsed = PythonParser::new().parse(code).unwrap();
        let node = walk_breadth_first(parsed.root())
            .into_iter()
            .find(|n| n.kind() == kind)
            .unwrap();
        dump(node, parsed.source()).unwrap()
    }

    #[test]
    fn test_dump_leaf() {
        assert_eq!(dump_first("x = 10\n", "integer"), "integer(10)");
        assert_eq!(dump_first("x = 'hi'\n", "string"), "string('hi')");
    }

    #[test]
    fn test_dump_comparison_keeps_operator() {
        assert_eq!(
            dump_first("if n <= 1:\n    pass\n", "comparison_operator"),
            "comparison_operator(identifier(n), '<=', integer(1))"
        );
    }

    #[test]
    fn test_dump_call_drops_punctuation() {
        assert_eq!(
            dump_first("foo(a, 2)\n", "call"),
            "call(identifier(foo), argument_list(identifier(a), integer(2)))"
        );
    }

    #[test]
    fn test_dump_skips_comments_inside_expression() {
        let out = dump_first("x = [\n    1,  # one\n    2,\n]\n", "list");
        assert_eq!(out, "list(integer(1), integer(2))");
    }
}

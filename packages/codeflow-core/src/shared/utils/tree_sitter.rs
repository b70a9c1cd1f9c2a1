//! Tree-sitter Utility Functions
//!
//! Common utilities for working with tree-sitter nodes, shared by the
//! extractors and the native step builder.

use std::collections::VecDeque;
use std::str::Utf8Error;

use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
#[inline]
pub fn find_child_by_kind<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    (0..node.child_count())
        .filter_map(|i| node.child(i))
        .find(|child| child.kind() == kind)
}

/// All direct children, anonymous tokens included
pub fn children<'tree>(node: Node<'tree>) -> Vec<Node<'tree>> {
    (0..node.child_count())
        .filter_map(|i| node.child(i))
        .collect()
}

/// Named direct children, comments excluded
pub fn named_children<'tree>(node: Node<'tree>) -> Vec<Node<'tree>> {
    (0..node.named_child_count())
        .filter_map(|i| node.named_child(i))
        .filter(|child| !child.is_extra())
        .collect()
}

/// Every named node below `root` (root included), breadth-first
///
/// Comments and other extras are skipped, as are their subtrees.
pub fn walk_breadth_first<'tree>(root: Node<'tree>) -> Vec<Node<'tree>> {
    let mut order = Vec::new();
    let mut queue = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        queue.extend(named_children(node));
    }

    order
}

/// Whether a definition/loop node carries the `async` keyword
pub fn is_async(node: Node<'_>) -> bool {
    children(node).iter().any(|child| child.kind() == "async")
}

// ═══════════════════════════════════════════════════════════════════════════
// Text and Position Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Source text covered by a node
#[inline]
pub fn node_text<'src>(node: Node<'_>, source: &'src str) -> Result<&'src str, Utf8Error> {
    node.utf8_text(source.as_bytes())
}

/// 1-based line of the node's first character
#[inline]
pub fn node_line(node: Node<'_>) -> usize {
    node.start_position().row + 1
}

/// Text of an identifier child (definition names)
pub fn identifier_name(node: Node<'_>, source: &str) -> Option<String> {
    let name = node
        .child_by_field_name("name")
        .or_else(|| find_child_by_kind(node, "identifier"))?;
    node_text(name, source).ok().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::{Parser, Tree};

    fn parse_python(code: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    #[test]
    fn test_walk_is_breadth_first() {
        let code = "def f():\n    x = 1\ny = 2\n";
        let tree = parse_python(code);
        let kinds: Vec<&str> = walk_breadth_first(tree.root_node())
            .iter()
            .map(|n| n.kind())
            .collect();

        assert_eq!(kinds[0], "module");
        // Both top-level statements come before anything nested in them
        assert_eq!(kinds[1], "function_definition");
        assert_eq!(kinds[2], "expression_statement");
    }

    #[test]
    fn test_walk_skips_comments() {
        let code = "# header\nx = 1  # trailing\n";
        let tree = parse_python(code);
        assert!(walk_breadth_first(tree.root_node())
            .iter()
            .all(|n| n.kind() != "comment"));
    }

    #[test]
    fn test_identifier_name_and_line() {
        let code = "\n\ndef hello(): pass\n";
        let tree = parse_python(code);
        let func = find_child_by_kind(tree.root_node(), "function_definition").unwrap();

        assert_eq!(identifier_name(func, code), Some("hello".to_string()));
        assert_eq!(node_line(func), 3);
    }

    #[test]
    fn test_is_async() {
        let code = "async def fetch(): pass\ndef plain(): pass\n";
        let tree = parse_python(code);
        let defs: Vec<_> = named_children(tree.root_node());

        assert!(is_async(defs[0]));
        assert!(!is_async(defs[1]));
    }
}

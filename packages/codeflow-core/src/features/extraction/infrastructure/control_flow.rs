//! Conditionals and loops

use tree_sitter::Node;

use super::dump::{dump, required_field};
use crate::features::extraction::domain::{
    render_or_unknown, ConditionalKind, ConditionalRecord, LoopKind, LoopRecord, RenderError,
    TruncationCaps,
};
use crate::features::parsing::ParsedSource;
use crate::shared::utils::tree_sitter::{is_async, node_line, walk_breadth_first};

/// Every `if` statement; `elif`/`else` clauses are part of it
pub fn extract_conditionals(parsed: &ParsedSource, value_cap: usize) -> Vec<ConditionalRecord> {
    walk_breadth_first(parsed.root())
        .into_iter()
        .filter(|node| node.kind() == "if_statement")
        .map(|node| ConditionalRecord {
            line: node_line(node),
            kind: ConditionalKind::If,
            test: render_field(node, "condition", parsed.source(), value_cap),
        })
        .collect()
}

/// Every non-async `for` and every `while` loop
pub fn extract_loops(parsed: &ParsedSource, caps: TruncationCaps) -> Vec<LoopRecord> {
    let source = parsed.source();
    let mut records = Vec::new();

    for node in walk_breadth_first(parsed.root()) {
        match node.kind() {
            "for_statement" if !is_async(node) => records.push(LoopRecord {
                line: node_line(node),
                kind: LoopKind::For,
                target: Some(render_field(node, "left", source, caps.target)),
                test: None,
            }),
            "while_statement" => records.push(LoopRecord {
                line: node_line(node),
                kind: LoopKind::While,
                target: None,
                test: Some(render_field(node, "condition", source, caps.value)),
            }),
            _ => {}
        }
    }

    records
}

fn render_field(node: Node<'_>, field: &'static str, source: &str, cap: usize) -> String {
    let rendered: Result<String, RenderError> =
        required_field(node, field).and_then(|child| dump(child, source));
    render_or_unknown(rendered, cap)
}

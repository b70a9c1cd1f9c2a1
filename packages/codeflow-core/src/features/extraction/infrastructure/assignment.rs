//! Assignment chains
//!
//! `a = b = 1` parses as nested `assignment` nodes. Unfolding the outermost
//! one yields every target in source order and the single assigned value.

use tree_sitter::Node;

/// Targets and value of one (possibly chained) plain assignment
#[derive(Debug)]
pub struct AssignmentChain<'tree> {
    pub head: Node<'tree>,
    pub targets: Vec<Node<'tree>>,
    pub value: Node<'tree>,
}

impl<'tree> AssignmentChain<'tree> {
    /// Unfold an outermost `assignment` node
    ///
    /// Returns `None` for annotated assignments and for nodes that are not
    /// the outermost link of a chain.
    pub fn unfold(head: Node<'tree>) -> Option<Self> {
        if head.kind() != "assignment" || is_chain_link(head) {
            return None;
        }

        let mut targets = Vec::new();
        let mut current = head;
        loop {
            if current.child_by_field_name("type").is_some() {
                return None;
            }
            targets.push(current.child_by_field_name("left")?);
            let right = current.child_by_field_name("right")?;
            if right.kind() == "assignment" {
                current = right;
            } else {
                return Some(Self {
                    head,
                    targets,
                    value: right,
                });
            }
        }
    }

    /// Targets that are a bare name
    pub fn simple_targets(&self) -> impl Iterator<Item = Node<'tree>> + '_ {
        self.targets
            .iter()
            .copied()
            .filter(|target| target.kind() == "identifier")
    }
}

fn is_chain_link(node: Node<'_>) -> bool {
    node.parent()
        .map_or(false, |parent| parent.kind() == "assignment")
}

//! Parsed source representation
//!
//! Wraps the tree-sitter tree together with the text it was parsed from, so
//! downstream consumers never pair a tree with the wrong source.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tree_sitter::{Node, Tree};

/// Successfully parsed Python source
#[derive(Debug, Clone)]
pub struct ParsedSource {
    tree: Tree,
    source: String,
}

impl ParsedSource {
    pub(crate) fn new(tree: Tree, source: String) -> Self {
        Self { tree, source }
    }

    /// Root (`module`) node
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Parser rejected the text
///
/// Terminal for that source: extraction and step initialization refuse to
/// run until corrected text is supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} (line {line})")]
pub struct SyntaxFailure {
    /// 1-based line of the first offending node
    pub line: usize,
    pub message: String,
}

impl SyntaxFailure {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_failure_display() {
        let failure = SyntaxFailure::new(4, "invalid syntax");
        assert_eq!(failure.to_string(), "invalid syntax (line 4)");
    }
}

//! Feature modules
//!
//! Each feature follows the same layering: `domain` (plain data),
//! `infrastructure` (tree-sitter / petgraph / file I/O), `application`
//! (entry points), and `ports` where a seam is swappable.

pub mod execution;
pub mod export;
pub mod extraction;
pub mod flow_graph;
pub mod parsing;

//! Flow graph
//!
//! Linear node/edge view over a sequence of execution steps.

pub mod domain;
pub mod infrastructure;

pub use domain::{FlowEdge, FlowNode, GraphData};
pub use infrastructure::{FlowGraph, FlowGraphBuilder};

//! Flow graph data shapes

use serde::{Deserialize, Serialize};

pub const NODE_TYPE_OPERATION: &str = "operation";
pub const EDGE_LABEL_NEXT: &str = "next";

/// Graph vertex for one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    /// `step_{i}`
    pub id: String,
    /// `"{kind}\nLine {line}"`
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: String,
}

impl FlowNode {
    pub fn for_step(index: usize, kind: &str, line: usize) -> Self {
        Self {
            id: step_id(index),
            label: format!("{}\nLine {}", kind, line),
            node_type: NODE_TYPE_OPERATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub source: String,
    pub target: String,
    pub label: String,
}

/// Serializable node/edge lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

pub fn step_id(index: usize) -> String {
    format!("step_{}", index)
}

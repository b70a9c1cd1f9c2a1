//! Petgraph-backed flow graph
//!
//! A path graph: one node per step, one `next` edge between consecutive
//! steps. No branch, loop or exception edges are modelled.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::features::execution::domain::{ExecutionStep, TimelineEntry};
use crate::features::flow_graph::domain::{FlowEdge, FlowNode, GraphData, EDGE_LABEL_NEXT};

#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    graph: DiGraph<FlowNode, &'static str>,
}

impl FlowGraph {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn graph(&self) -> &DiGraph<FlowNode, &'static str> {
        &self.graph
    }

    /// Nodes in step order and edges by source
    pub fn graph_data(&self) -> GraphData {
        let nodes = self
            .graph
            .node_indices()
            .map(|idx| self.graph[idx].clone())
            .collect();
        let edges = self
            .graph
            .edge_references()
            .map(|edge| FlowEdge {
                source: self.graph[edge.source()].id.clone(),
                target: self.graph[edge.target()].id.clone(),
                label: edge.weight().to_string(),
            })
            .collect();

        GraphData { nodes, edges }
    }
}

/// Builds the linear graph for a step sequence
#[derive(Debug, Default, Clone, Copy)]
pub struct FlowGraphBuilder;

impl FlowGraphBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, steps: &[ExecutionStep]) -> FlowGraph {
        self.build_from(steps.iter().map(|step| (step.kind.as_str(), step.line)))
    }

    /// Graph of the executed part of a session
    pub fn build_from_timeline(&self, timeline: &[TimelineEntry]) -> FlowGraph {
        self.build_from(
            timeline
                .iter()
                .map(|entry| (entry.step.kind.as_str(), entry.step.line)),
        )
    }

    fn build_from<'a>(&self, steps: impl Iterator<Item = (&'a str, usize)>) -> FlowGraph {
        let mut graph = DiGraph::new();
        let mut previous: Option<NodeIndex> = None;

        for (index, (kind, line)) in steps.enumerate() {
            let idx = graph.add_node(FlowNode::for_step(index, kind, line));
            if let Some(prev) = previous {
                graph.add_edge(prev, idx, EDGE_LABEL_NEXT);
            }
            previous = Some(idx);
        }

        debug!(nodes = graph.node_count(), edges = graph.edge_count(), "flow graph built");
        FlowGraph { graph }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn steps(lines: &[usize]) -> Vec<ExecutionStep> {
        lines
            .iter()
            .map(|&line| ExecutionStep::new(line, "expression_statement", "main.py"))
            .collect()
    }

    #[test]
    fn test_path_graph() {
        let graph = FlowGraphBuilder::new().build(&steps(&[1, 2, 4]));
        let data = graph.graph_data();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(data.nodes[0].id, "step_0");
        assert_eq!(data.nodes[2].label, "expression_statement\nLine 4");
        assert_eq!(data.nodes[1].node_type, "operation");
        assert_eq!(
            data.edges,
            vec![
                FlowEdge {
                    source: "step_0".into(),
                    target: "step_1".into(),
                    label: "next".into(),
                },
                FlowEdge {
                    source: "step_1".into(),
                    target: "step_2".into(),
                    label: "next".into(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_and_single() {
        let builder = FlowGraphBuilder::new();
        assert!(builder.build(&[]).is_empty());
        assert_eq!(builder.build(&[]).graph_data(), GraphData::default());

        let single = builder.build(&steps(&[9]));
        assert_eq!(single.node_count(), 1);
        assert_eq!(single.edge_count(), 0);
    }

    #[test]
    fn test_graph_data_json_shape() {
        let data = FlowGraphBuilder::new().build(&steps(&[1, 2])).graph_data();
        let value = serde_json::to_value(&data).unwrap();

        assert_eq!(value["nodes"][0]["type"], "operation");
        assert_eq!(value["edges"][0]["label"], "next");
    }
}

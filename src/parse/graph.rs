//! petgraph-based directed graph wrapper for the visual workflow.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::Workflow;
use crate::validate::ValidationError;

/// Directed view of a workflow's nodes and edges. Node weights are node ids,
/// edge weights are edge ids.
pub struct WorkflowGraph {
    pub graph: DiGraph<String, String>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl WorkflowGraph {
    /// Build the graph, rejecting edges that reference nodes absent from
    /// `workflow.nodes`. The editing surface cannot produce such edges by
    /// normal interaction, so a failure here means the snapshot was
    /// assembled by hand.
    pub fn build(workflow: &Workflow) -> Result<Self, Vec<ValidationError>> {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let mut errors = Vec::new();

        for node in &workflow.nodes {
            let id = node.id().to_string();
            let idx = graph.add_node(id.clone());
            node_indices.insert(id, idx);
        }

        for edge in &workflow.edges {
            let source_idx = node_indices.get(&edge.source);
            let target_idx = node_indices.get(&edge.target);

            match (source_idx, target_idx) {
                (Some(&s), Some(&t)) => {
                    graph.add_edge(s, t, edge.id.clone());
                }
                (None, _) => {
                    errors.push(ValidationError::DanglingEdge {
                        edge_id: edge.id.clone(),
                        node_id: edge.source.clone(),
                    });
                }
                (_, None) => {
                    errors.push(ValidationError::DanglingEdge {
                        edge_id: edge.id.clone(),
                        node_id: edge.target.clone(),
                    });
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(WorkflowGraph { graph, node_indices })
    }

    pub fn incoming_count(&self, node_id: &str) -> usize {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return 0;
        };
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
            .count()
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return 0;
        };
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .count()
    }

    /// A node counts as connected if it is the source or target of any edge.
    pub fn is_connected(&self, node_id: &str) -> bool {
        self.incoming_count(node_id) > 0 || self.outgoing_count(node_id) > 0
    }
}

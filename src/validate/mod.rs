//! Workflow validation.
//!
//! Structural rules gate saving and test-running a workflow; node-config
//! rules feed the editor's config panel and never block either action.

pub mod node_rules;
pub mod structural;

use thiserror::Error;

use crate::error::Diagnostic;
use crate::parse::graph::WorkflowGraph;
use crate::parse::types::{Workflow, WorkflowNode};

/// Why the workflow is being validated. A test run tolerates a missing
/// name; a save does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Save,
    Test,
}

/// A violated structural rule. Messages carry the exact phrasing the
/// builder shows inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Workflow name is required")]
    MissingName,
    #[error("Add at least one node to the workflow")]
    EmptyGraph,
    #[error("Workflow must have a trigger node")]
    NoTrigger,
    #[error("Workflow can only have one trigger node, found {found}")]
    MultipleTriggers { found: usize },
    #[error("Node '{node_id}' is not connected to the workflow")]
    OrphanedNode { node_id: String },
    #[error("Edge '{edge_id}' references unknown node '{node_id}'")]
    DanglingEdge { edge_id: String, node_id: String },
}

impl ValidationError {
    /// Stable code for the editing surface, numbered in check order.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "V001",
            ValidationError::EmptyGraph => "V002",
            ValidationError::NoTrigger => "V003",
            ValidationError::MultipleTriggers { .. } => "V004",
            ValidationError::OrphanedNode { .. } => "V005",
            ValidationError::DanglingEdge { .. } => "V006",
        }
    }

    pub fn node_id(&self) -> Option<&str> {
        match self {
            ValidationError::OrphanedNode { node_id } => Some(node_id),
            ValidationError::DanglingEdge { node_id, .. } => Some(node_id),
            _ => None,
        }
    }
}

/// Validate a workflow against the structural rules, stopping at the first
/// violation. Check order is fixed so repeated runs over the same snapshot
/// report the same reason.
pub fn validate(
    workflow: &Workflow,
    graph: &WorkflowGraph,
    intent: Intent,
) -> Result<(), ValidationError> {
    structural::check_name(workflow, intent)?;
    structural::check_has_nodes(workflow)?;
    structural::check_single_trigger(workflow)?;
    structural::check_connected(workflow, graph)?;
    Ok(())
}

/// One-shot variant that builds the graph itself. Edge-reference problems
/// surface as `DanglingEdge` after the trigger checks, before orphan
/// detection.
pub fn validate_workflow(workflow: &Workflow, intent: Intent) -> Result<(), ValidationError> {
    structural::check_name(workflow, intent)?;
    structural::check_has_nodes(workflow)?;
    structural::check_single_trigger(workflow)?;
    let graph = WorkflowGraph::build(workflow).map_err(|mut errors| errors.swap_remove(0))?;
    structural::check_connected(workflow, &graph)?;
    Ok(())
}

/// Collect every problem in the workflow: all structural violations (every
/// orphan, not just the first) followed by per-node config issues. The
/// structural prefix preserves check order, so the first entry agrees with
/// what [`validate`] returns.
pub fn diagnose(workflow: &Workflow, graph: &WorkflowGraph, intent: Intent) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = structural::collect(workflow, graph, intent)
        .into_iter()
        .map(Diagnostic::from)
        .collect();

    for node in &workflow.nodes {
        diagnostics.extend(validate_node(node));
    }

    diagnostics
}

/// Validate a single node's configuration.
pub fn validate_node(node: &WorkflowNode) -> Vec<Diagnostic> {
    node_rules::validate_node_config(node)
}

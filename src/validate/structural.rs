//! Structural validation rules (V001–V006).
//!
//! Rule order matters: [`super::validate`] returns the first violation, and
//! the builder's toast shows exactly that reason.

use super::{Intent, ValidationError};
use crate::parse::graph::WorkflowGraph;
use crate::parse::types::Workflow;

/// V001: a save needs a non-blank name. Test runs skip this.
pub(crate) fn check_name(workflow: &Workflow, intent: Intent) -> Result<(), ValidationError> {
    if intent == Intent::Save && workflow.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    Ok(())
}

/// V002: an empty canvas has nothing to run.
pub(crate) fn check_has_nodes(workflow: &Workflow) -> Result<(), ValidationError> {
    if workflow.nodes.is_empty() {
        return Err(ValidationError::EmptyGraph);
    }
    Ok(())
}

/// V003/V004: exactly one trigger node. Zero means no entry point; more
/// than one makes the schedule origin ambiguous.
pub(crate) fn check_single_trigger(workflow: &Workflow) -> Result<(), ValidationError> {
    let found = workflow.nodes.iter().filter(|n| n.is_trigger()).count();
    match found {
        0 => Err(ValidationError::NoTrigger),
        1 => Ok(()),
        _ => Err(ValidationError::MultipleTriggers { found }),
    }
}

/// V005: every non-trigger node must touch at least one edge. The trigger
/// is exempt; a lone trigger is a valid workflow that does nothing.
///
/// This is an endpoint check, not reachability from the trigger: a
/// connected island of non-trigger nodes passes, matching the builder's
/// long-standing behavior.
pub(crate) fn check_connected(
    workflow: &Workflow,
    graph: &WorkflowGraph,
) -> Result<(), ValidationError> {
    match orphaned_nodes(workflow, graph).into_iter().next() {
        Some(node_id) => Err(ValidationError::OrphanedNode { node_id }),
        None => Ok(()),
    }
}

/// Ids of non-trigger nodes with no edge touching them, in `nodes` order.
pub(crate) fn orphaned_nodes(workflow: &Workflow, graph: &WorkflowGraph) -> Vec<String> {
    workflow
        .nodes
        .iter()
        .filter(|n| !n.is_trigger() && !graph.is_connected(n.id()))
        .map(|n| n.id().to_string())
        .collect()
}

/// Run every rule and return all violations, in rule order.
pub(crate) fn collect(
    workflow: &Workflow,
    graph: &WorkflowGraph,
    intent: Intent,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Err(e) = check_name(workflow, intent) {
        errors.push(e);
    }
    if let Err(e) = check_has_nodes(workflow) {
        errors.push(e);
    }
    if let Err(e) = check_single_trigger(workflow) {
        errors.push(e);
    }
    for node_id in orphaned_nodes(workflow, graph) {
        errors.push(ValidationError::OrphanedNode { node_id });
    }

    errors
}

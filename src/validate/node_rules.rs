//! Per-node configuration validation (N001–N005).
//!
//! Advisory to the config panel; a config issue never blocks saving or
//! test-running the workflow.
//! SYNC NOTE: Match arms here must track `WorkflowNode` in
//! `src/parse/types.rs` and `src/types/knowledge.ts`.

use crate::error::Diagnostic;
use crate::parse::types::*;

/// Validate a single node's config. Returns all issues found.
pub fn validate_node_config(node: &WorkflowNode) -> Vec<Diagnostic> {
    let mut issues = Vec::new();

    match node {
        WorkflowNode::Trigger(n) => {
            let config = &n.data.config;
            match (&config.cron, config.interval) {
                (None, None) => {
                    issues.push(Diagnostic::config(
                        "N001",
                        "Trigger must set a cron expression or an interval",
                        &n.id,
                    ));
                }
                (Some(cron), _) if cron.trim().is_empty() => {
                    issues.push(Diagnostic::config(
                        "N001",
                        "Cron expression must not be empty",
                        &n.id,
                    ));
                }
                (_, Some(0)) => {
                    issues.push(Diagnostic::config(
                        "N001",
                        "Trigger interval must be at least one minute",
                        &n.id,
                    ));
                }
                _ => {}
            }
        }
        WorkflowNode::Search(n) => {
            let config = &n.data.config;
            if !config.keywords.iter().any(|k| !k.trim().is_empty()) {
                issues.push(Diagnostic::config(
                    "N002",
                    "Search node must have at least one keyword",
                    &n.id,
                ));
            }
            if config.max_results == 0 {
                issues.push(Diagnostic::config(
                    "N002",
                    "Search result cap must be greater than zero",
                    &n.id,
                ));
            }
        }
        WorkflowNode::Filter(n) => {
            let config = &n.data.config;
            let no_keywords = !config.keyword_includes.iter().any(|k| !k.trim().is_empty());
            if config.min_citations.is_none() && no_keywords {
                issues.push(Diagnostic::config(
                    "N003",
                    "Filter node must define at least one criterion",
                    &n.id,
                ));
            }
        }
        WorkflowNode::Action(n) => {
            if let ActionConfig::Tag { tags } = &n.data.config {
                if !tags.iter().any(|t| !t.trim().is_empty()) {
                    issues.push(Diagnostic::config(
                        "N004",
                        "Tag action must list at least one tag",
                        &n.id,
                    ));
                }
            }
        }
        WorkflowNode::Notification(n) => {
            if n.data.config.template.trim().is_empty() {
                issues.push(Diagnostic::config(
                    "N005",
                    "Notification message template must not be empty",
                    &n.id,
                ));
            }
        }
    }

    issues
}

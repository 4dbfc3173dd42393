//! The collect-all diagnostics surface the editor renders inline.

#[allow(dead_code)]
mod helpers;

use helpers::*;
use validator::validate::{self, Intent};

/// An unnamed draft with an unconfigured trigger and a stranded, empty
/// filter. Every layer has something to say about it.
fn broken_workflow() -> validator::parse::types::Workflow {
    unnamed_workflow(
        vec![bare_trigger_node("t-1"), bare_filter_node("filter-1")],
        vec![],
    )
}

#[test]
fn diagnose_collects_every_problem() {
    let workflow = broken_workflow();
    let graph = build_graph(&workflow);
    let diagnostics = validate::diagnose(&workflow, &graph, Intent::Save);
    let codes: Vec<&str> = diagnostics.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["V001", "V005", "N001", "N003"]);
}

#[test]
fn diagnose_first_agrees_with_validate() {
    let workflow = broken_workflow();
    let graph = build_graph(&workflow);
    let diagnostics = validate::diagnose(&workflow, &graph, Intent::Save);
    let first = validate::validate(&workflow, &graph, Intent::Save).unwrap_err();
    assert_eq!(diagnostics[0].code, first.code());
}

#[test]
fn test_intent_drops_the_name_complaint() {
    let workflow = broken_workflow();
    let graph = build_graph(&workflow);
    let diagnostics = validate::diagnose(&workflow, &graph, Intent::Test);
    assert!(diagnostics.iter().all(|d| d.code != "V001"));
}

#[test]
fn config_issues_never_block_validation() {
    // Both nodes have config problems, but the graph is structurally sound.
    let workflow = workflow(
        vec![bare_trigger_node("t-1"), bare_filter_node("filter-1")],
        vec![edge("e1", "t-1", "filter-1")],
    );
    let graph = build_graph(&workflow);
    assert_eq!(validate::validate(&workflow, &graph, Intent::Save), Ok(()));
    assert!(!validate::diagnose(&workflow, &graph, Intent::Save).is_empty());
}

#[test]
fn broken_workflow_report_snapshot() {
    let workflow = broken_workflow();
    let graph = build_graph(&workflow);
    let rendered = validate::diagnose(&workflow, &graph, Intent::Save)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!("broken_workflow_report", rendered);
}

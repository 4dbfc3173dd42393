use validator::parse::graph::WorkflowGraph;
use validator::parse::types::*;

// =============================================================================
// Workflow builders
// =============================================================================

/// Workflow with the given nodes and edges and a name that passes save
/// validation. Metadata fields take the editor's draft defaults.
pub fn workflow(nodes: Vec<WorkflowNode>, edges: Vec<WorkflowEdge>) -> Workflow {
    named_workflow("Daily Scan", nodes, edges)
}

pub fn named_workflow(name: &str, nodes: Vec<WorkflowNode>, edges: Vec<WorkflowEdge>) -> Workflow {
    Workflow {
        id: "wf-test".into(),
        name: name.into(),
        description: String::new(),
        status: WorkflowStatus::default(),
        trigger: None,
        nodes,
        edges,
        stats: WorkflowStats::default(),
        last_run: None,
        next_run: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn unnamed_workflow(nodes: Vec<WorkflowNode>, edges: Vec<WorkflowEdge>) -> Workflow {
    named_workflow("", nodes, edges)
}

pub fn build_graph(workflow: &Workflow) -> WorkflowGraph {
    WorkflowGraph::build(workflow).expect("Should build graph")
}

// =============================================================================
// Node builders
// =============================================================================

fn position() -> Position {
    Position { x: 0.0, y: 0.0 }
}

/// Trigger with a daily cron schedule.
pub fn trigger_node(id: &str) -> WorkflowNode {
    WorkflowNode::Trigger(NodeBase {
        id: id.into(),
        position: position(),
        data: NodeData {
            label: "Trigger".into(),
            config: TriggerConfig {
                cron: Some("0 9 * * *".into()),
                interval: None,
            },
        },
    })
}

/// Trigger dropped on the canvas and never configured.
pub fn bare_trigger_node(id: &str) -> WorkflowNode {
    WorkflowNode::Trigger(NodeBase {
        id: id.into(),
        position: position(),
        data: NodeData {
            label: "Trigger".into(),
            config: TriggerConfig::default(),
        },
    })
}

pub fn search_node(id: &str) -> WorkflowNode {
    WorkflowNode::Search(NodeBase {
        id: id.into(),
        position: position(),
        data: NodeData {
            label: "Search".into(),
            config: SearchConfig {
                keywords: vec!["oncology".into(), "biomarker".into()],
                max_results: 100,
            },
        },
    })
}

pub fn filter_node(id: &str) -> WorkflowNode {
    WorkflowNode::Filter(NodeBase {
        id: id.into(),
        position: position(),
        data: NodeData {
            label: "Filter".into(),
            config: FilterConfig {
                min_citations: Some(10),
                keyword_includes: Vec::new(),
            },
        },
    })
}

pub fn bare_filter_node(id: &str) -> WorkflowNode {
    WorkflowNode::Filter(NodeBase {
        id: id.into(),
        position: position(),
        data: NodeData {
            label: "Filter".into(),
            config: FilterConfig::default(),
        },
    })
}

pub fn action_node(id: &str) -> WorkflowNode {
    WorkflowNode::Action(NodeBase {
        id: id.into(),
        position: position(),
        data: NodeData {
            label: "Summarize".into(),
            config: ActionConfig::Summarize,
        },
    })
}

pub fn tag_action_node(id: &str, tags: Vec<&str>) -> WorkflowNode {
    WorkflowNode::Action(NodeBase {
        id: id.into(),
        position: position(),
        data: NodeData {
            label: "Tag papers".into(),
            config: ActionConfig::Tag {
                tags: tags.into_iter().map(String::from).collect(),
            },
        },
    })
}

pub fn notification_node(id: &str) -> WorkflowNode {
    WorkflowNode::Notification(NodeBase {
        id: id.into(),
        position: position(),
        data: NodeData {
            label: "Notify".into(),
            config: NotificationConfig {
                channel: NotificationChannel::Email,
                template: "Found {{count}} new papers".into(),
            },
        },
    })
}

// =============================================================================
// Edge builder
// =============================================================================

pub fn edge(id: &str, source: &str, target: &str) -> WorkflowEdge {
    WorkflowEdge {
        id: id.into(),
        source: source.into(),
        target: target.into(),
        edge_type: None,
    }
}

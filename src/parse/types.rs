//! Rust types mirroring `src/types/knowledge.ts`.
//!
//! These types are the serde target for the workflow JSON the builder
//! produces. SYNC NOTE: Keep this file aligned with `src/types/knowledge.ts`.
//! When NodeType/config shapes change, also review the validate module and
//! the frontend config panel renderers.

use serde::{Deserialize, Serialize};

// =============================================================================
// TOP-LEVEL WORKFLOW
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    /// May be empty while the workflow is a draft; rejected on save.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: WorkflowStatus,
    /// Schedule summary the editor derives from the trigger node at save
    /// time. Absent on drafts.
    #[serde(default)]
    pub trigger: Option<WorkflowTrigger>,
    pub nodes: Vec<WorkflowNode>,
    pub edges: Vec<WorkflowEdge>,
    #[serde(default)]
    pub stats: WorkflowStats,
    #[serde(default)]
    pub last_run: Option<String>,
    #[serde(default)]
    pub next_run: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Active,
    #[default]
    Paused,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default)]
    pub edge_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

// =============================================================================
// WORKFLOW-LEVEL TRIGGER SUMMARY
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTrigger {
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    pub config: ScheduleConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    Time,
    Execution,
    Mcp,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    #[serde(default)]
    pub cron: Option<String>,
    /// Minutes between runs.
    #[serde(default)]
    pub interval: Option<u32>,
    /// Id of the workflow whose completion starts this one
    /// (execution-type triggers only).
    #[serde(default)]
    pub depends_on: Option<String>,
}

// =============================================================================
// RUN STATISTICS
// =============================================================================

/// Owned by the persistence collaborator; carried opaquely through the
/// validator and never interpreted here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStats {
    pub total_runs: u64,
    pub success_rate: f64,
    pub papers_processed: u64,
}

// =============================================================================
// NODE BASE
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeData<C> {
    pub label: String,
    pub config: C,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeBase<C> {
    pub id: String,
    pub position: Position,
    pub data: NodeData<C>,
}

// =============================================================================
// WORKFLOW NODE — tagged union over the 5 node kinds
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorkflowNode {
    #[serde(rename = "trigger")]
    Trigger(NodeBase<TriggerConfig>),
    #[serde(rename = "search")]
    Search(NodeBase<SearchConfig>),
    #[serde(rename = "filter")]
    Filter(NodeBase<FilterConfig>),
    #[serde(rename = "action")]
    Action(NodeBase<ActionConfig>),
    #[serde(rename = "notification")]
    Notification(NodeBase<NotificationConfig>),
}

impl WorkflowNode {
    pub fn id(&self) -> &str {
        match self {
            WorkflowNode::Trigger(n) => &n.id,
            WorkflowNode::Search(n) => &n.id,
            WorkflowNode::Filter(n) => &n.id,
            WorkflowNode::Action(n) => &n.id,
            WorkflowNode::Notification(n) => &n.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            WorkflowNode::Trigger(n) => &n.data.label,
            WorkflowNode::Search(n) => &n.data.label,
            WorkflowNode::Filter(n) => &n.data.label,
            WorkflowNode::Action(n) => &n.data.label,
            WorkflowNode::Notification(n) => &n.data.label,
        }
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            WorkflowNode::Trigger(_) => "trigger",
            WorkflowNode::Search(_) => "search",
            WorkflowNode::Filter(_) => "filter",
            WorkflowNode::Action(_) => "action",
            WorkflowNode::Notification(_) => "notification",
        }
    }

    pub fn is_trigger(&self) -> bool {
        matches!(self, WorkflowNode::Trigger(_))
    }
}

// =============================================================================
// NODE CONFIGS
// =============================================================================

/// When/how often the workflow runs. The config panel offers both fields;
/// the node-rule layer flags a trigger that sets neither.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TriggerConfig {
    #[serde(default)]
    pub cron: Option<String>,
    /// Minutes between runs.
    #[serde(default)]
    pub interval: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Result cap per run.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

fn default_max_results() -> u32 {
    100
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            keywords: Vec::new(),
            max_results: default_max_results(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    #[serde(default)]
    pub min_citations: Option<u32>,
    #[serde(default)]
    pub keyword_includes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "actionType", rename_all = "lowercase")]
pub enum ActionConfig {
    /// Save matched papers to the user's library.
    Save,
    /// Apply the listed tags to matched papers.
    Tag {
        #[serde(default)]
        tags: Vec<String>,
    },
    /// Generate an AI summary of the matched papers.
    Summarize,
    /// Export matched papers to an external format.
    Export,
}

impl Default for ActionConfig {
    fn default() -> Self {
        ActionConfig::Save
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotificationConfig {
    #[serde(default)]
    pub channel: NotificationChannel,
    /// Message template, e.g. "Found {{count}} new papers".
    #[serde(default)]
    pub template: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationChannel {
    #[default]
    Email,
    InApp,
    Slack,
    Webhook,
}

//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::Diagnostic;
use crate::validate::{self, Intent};

/// Validate a workflow JSON for the given intent ("save" or "test").
/// Returns a JSON array of Diagnostic objects; an empty array means the
/// workflow may be saved or test-run.
#[wasm_bindgen]
pub fn validate_workflow(json: &str, intent: &str) -> JsValue {
    let result = validate_workflow_inner(json, intent);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(json: &str, intent: &str) -> Vec<DiagnosticDto> {
    let intent = match intent {
        "save" => Intent::Save,
        "test" => Intent::Test,
        other => {
            return vec![DiagnosticDto::from(Diagnostic::parse(
                "P002",
                format!("Unknown intent '{}', expected 'save' or 'test'", other),
            ))];
        }
    };

    let (workflow, graph) = match crate::parse::parse_and_build(json) {
        Ok(pair) => pair,
        Err(diagnostics) => return diagnostics.into_iter().map(DiagnosticDto::from).collect(),
    };

    validate::diagnose(&workflow, &graph, intent)
        .into_iter()
        .map(DiagnosticDto::from)
        .collect()
}

/// Validate a single node JSON for the config panel.
/// Returns a JSON array of Diagnostic objects.
#[wasm_bindgen]
pub fn validate_node(node_json: &str) -> JsValue {
    let result = validate_node_inner(node_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_node_inner(node_json: &str) -> Vec<DiagnosticDto> {
    let node = match serde_json::from_str::<crate::parse::types::WorkflowNode>(node_json) {
        Ok(n) => n,
        Err(e) => {
            return vec![DiagnosticDto::from(Diagnostic::parse(
                "P001",
                format!("Failed to parse node JSON: {}", e),
            ))];
        }
    };

    validate::validate_node(&node)
        .into_iter()
        .map(DiagnosticDto::from)
        .collect()
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct DiagnosticDto {
    code: String,
    stage: String,
    message: String,
    node_id: Option<String>,
}

impl From<Diagnostic> for DiagnosticDto {
    fn from(d: Diagnostic) -> Self {
        DiagnosticDto {
            code: d.code,
            stage: d.stage.to_string(),
            message: d.message,
            node_id: d.node_id,
        }
    }
}

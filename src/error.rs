//! Unified diagnostic type used across all validation stages.

use crate::validate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parse,
    Validate,
    Config,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Parse => write!(f, "Parse"),
            Stage::Validate => write!(f, "Validate"),
            Stage::Config => write!(f, "Config"),
        }
    }
}

/// A single problem found in a workflow, addressed to the editing surface.
///
/// `code` is stable so the frontend can key inline messages off it;
/// `message` is the human-readable reason shown in the builder.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code: String,
    pub stage: Stage,
    pub message: String,
    pub node_id: Option<String>,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node_id {
            Some(id) => write!(
                f,
                "[{}:{}] {} (node '{}')",
                self.stage, self.code, self.message, id
            ),
            None => write!(f, "[{}:{}] {}", self.stage, self.code, self.message),
        }
    }
}

impl std::error::Error for Diagnostic {}

impl From<ValidationError> for Diagnostic {
    fn from(e: ValidationError) -> Self {
        Diagnostic {
            code: e.code().to_string(),
            stage: Stage::Validate,
            message: e.to_string(),
            node_id: e.node_id().map(String::from),
        }
    }
}

impl Diagnostic {
    pub fn parse(code: &str, message: impl Into<String>) -> Self {
        Diagnostic {
            code: code.into(),
            stage: Stage::Parse,
            message: message.into(),
            node_id: None,
        }
    }

    pub fn config(code: &str, message: impl Into<String>, node_id: impl Into<String>) -> Self {
        Diagnostic {
            code: code.into(),
            stage: Stage::Config,
            message: message.into(),
            node_id: Some(node_id.into()),
        }
    }
}

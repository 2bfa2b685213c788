//! Live-session setup for the model-serving client.
//!
//! [`SessionSetup`] is everything registered once when a conversation opens:
//! model, response modalities, system instruction, tool declarations, and how
//! to reach the backend.

pub mod prompts;

use serde::Serialize;
use serde_json::Value;

use crate::config::{Backend, ModelConfig};
use crate::error::ConfigError;
use crate::tools::catalog::{ToolSpec, TOOL_CATALOG};

pub use prompts::SYSTEM_INSTRUCTION;

/// One callable function as the model-serving API expects it.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl From<&ToolSpec> for FunctionDeclaration {
    fn from(spec: &ToolSpec) -> Self {
        Self {
            name: spec.name.to_string(),
            description: spec.description.to_string(),
            parameters: spec.parameters_schema(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSetup {
    pub model: String,
    pub backend: Backend,
    pub response_modalities: Vec<String>,
    pub system_instruction: String,
    pub function_declarations: Vec<FunctionDeclaration>,
}

impl SessionSetup {
    /// Build the setup from config, resolving the backend from the process
    /// environment.
    pub fn from_config(model: &ModelConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_backend(model, model.backend()?))
    }

    pub fn with_backend(model: &ModelConfig, backend: Backend) -> Self {
        Self {
            model: model.model_id.clone(),
            backend,
            response_modalities: model.response_modalities.clone(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            function_declarations: TOOL_CATALOG.iter().map(FunctionDeclaration::from).collect(),
        }
    }
}

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use crate::utils::serialization::{
    FileSerializer, FileUtils, JsonSerializer, PrettyJsonSerializer,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Parameter key holding the embedded code payload on a code node.
pub const JS_CODE_PARAMETER: &str = "jsCode";

fn default_opaque() -> Value {
    Value::Object(Map::new())
}

/// Wrapper shape of an exported workflow: the real document lives under `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowExport {
    pub data: WorkflowDocument,
}

/// The workflow document as exported by the automation engine.
///
/// `connections`, `settings`, and `staticData` are carried opaquely and pass
/// through by value. Unknown top-level fields are tolerated on load and dropped
/// by the output projection.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkflowDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<WorkflowNode>,
    #[serde(default = "default_opaque")]
    pub connections: Value,
    #[serde(default = "default_opaque")]
    pub settings: Value,
    #[serde(default = "default_opaque", rename = "staticData")]
    pub static_data: Value,
}

impl WorkflowDocument {
    /// Project the five retained top-level fields into the output payload.
    pub fn into_payload(self) -> WorkflowPayload {
        WorkflowPayload {
            name: self.name,
            nodes: self.nodes,
            connections: self.connections,
            settings: self.settings,
            static_data: self.static_data,
        }
    }
}

/// One node of the workflow. Only `name` and `parameters` matter to the
/// patcher; every other node field round-trips through `extra`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkflowNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkflowNode {
    /// True when the node carries a `parameters.jsCode` string.
    pub fn has_js_code(&self) -> bool {
        self.parameters
            .as_ref()
            .and_then(Value::as_object)
            .map(|params| params.contains_key(JS_CODE_PARAMETER))
            .unwrap_or(false)
    }
}

/// Narrowed output shape: exactly the five retained fields, nothing else.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkflowPayload {
    pub name: String,
    pub nodes: Vec<WorkflowNode>,
    pub connections: Value,
    pub settings: Value,
    #[serde(rename = "staticData")]
    pub static_data: Value,
}

/// Read and parse a workflow export, returning the inner document.
pub fn load_export(path: &Path) -> Result<WorkflowDocument, AppError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            ErrorCategory::IoError,
            format!("Failed to read workflow export {}: {}", path.display(), e),
        )
    })?;
    let export: WorkflowExport = serde_json::from_str(&raw).map_err(|e| {
        AppError::new(
            ErrorCategory::SerializationError,
            format!("Failed to parse workflow export {}: {}", path.display(), e),
        )
    })?;
    Ok(export.data)
}

/// Serialize the payload (compact unless `pretty`) and write it to `path`,
/// silently overwriting. The write is a single non-atomic operation.
pub fn save_payload(payload: &WorkflowPayload, path: &Path, pretty: bool) -> Result<(), AppError> {
    let result = if pretty {
        FileUtils.save_to_file(path, payload, &PrettyJsonSerializer)
    } else {
        FileUtils.save_to_file(path, payload, &JsonSerializer)
    };
    result.map_err(|e| {
        AppError::new(
            ErrorCategory::IoError,
            format!("Failed to write patched export {}: {}", path.display(), e),
        )
    })
}

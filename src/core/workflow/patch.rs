use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use crate::core::workflow::schema::{WorkflowDocument, JS_CODE_PARAMETER};
use serde_json::Value;

/// Result of one patch pass over the node list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Names of the nodes that were rewritten, in document order.
    pub updated: Vec<String>,
}

impl PatchOutcome {
    pub fn is_empty(&self) -> bool {
        self.updated.is_empty()
    }
}

/// Rewrite `parameters.jsCode` on every node whose name equals `target`.
///
/// Matching is exact string equality. Node names are not unique, so several
/// nodes can be rewritten in one pass; zero matches is a successful no-op.
/// A matched node whose `parameters` is missing or not an object is a
/// validation failure, never a silent skip.
pub fn apply_code_patch(
    document: &mut WorkflowDocument,
    target: &str,
    code: &str,
) -> Result<PatchOutcome, AppError> {
    let workflow_name = document.name.clone();
    let mut outcome = PatchOutcome::default();

    for node in &mut document.nodes {
        if node.name != target {
            continue;
        }
        let params = node
            .parameters
            .as_mut()
            .and_then(Value::as_object_mut)
            .ok_or_else(|| {
                AppError::new(
                    ErrorCategory::ValidationError,
                    format!("Node '{}' has no parameters object to patch", target),
                )
                .with_context(format!("workflow '{}'", workflow_name))
            })?;
        params.insert(
            JS_CODE_PARAMETER.to_string(),
            Value::String(code.to_string()),
        );
        tracing::debug!(node = %node.name, "replaced jsCode parameter");
        outcome.updated.push(node.name.clone());
    }

    Ok(outcome)
}

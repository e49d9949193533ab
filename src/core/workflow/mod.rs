//! Loading, patching, and projecting workflow automation exports.

pub mod patch;
pub mod schema;
pub mod template;

pub use patch::{apply_code_patch, PatchOutcome};
pub use schema::{WorkflowDocument, WorkflowExport, WorkflowNode, WorkflowPayload};

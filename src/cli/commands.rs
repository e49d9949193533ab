use crate::{
    cli::args::{NodesArgs, PatchArgs},
    core::workflow::{patch::apply_code_patch, schema, template},
    core::{AppError, ErrorCategory},
    Result,
};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Handles `wfpatch patch`: load the export, rewrite the target node's code
/// parameter, project the retained fields, write the new export.
pub fn patch(args: PatchArgs) -> Result<()> {
    let out_path = args.resolved_out_path();
    debug!(
        workflow = %args.workflow.display(),
        out = %out_path.display(),
        "starting patch run"
    );

    let mut document = schema::load_export(&args.workflow)?;

    let target = args
        .node
        .as_deref()
        .unwrap_or(template::DEFAULT_TARGET_NODE);
    let code = match &args.code_file {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read code file {}: {}", path.display(), e),
            )
        })?,
        None => template::BUILD_DIGEST_CODE.to_string(),
    };

    let outcome = apply_code_patch(&mut document, target, &code)?;
    for name in &outcome.updated {
        println!("Updated {}", name);
    }
    debug!(updated = outcome.updated.len(), "patch pass complete");

    let payload = document.into_payload();
    schema::save_payload(&payload, &out_path, args.pretty)?;
    println!("Saved {}", display_file_name(&out_path));

    Ok(())
}

/// Handles `wfpatch nodes`: print one line per node of the export.
pub fn nodes(args: NodesArgs) -> Result<()> {
    let document = schema::load_export(&args.workflow)?;

    if document.nodes.is_empty() {
        println!("No nodes in workflow '{}'.", document.name);
        return Ok(());
    }

    println!("Nodes in workflow '{}':", document.name);
    for node in &document.nodes {
        if node.has_js_code() {
            println!("  {} [jsCode]", node.name);
        } else {
            println!("  {}", node.name);
        }
    }

    Ok(())
}

fn display_file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

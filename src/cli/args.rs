use clap::Args;
use std::path::PathBuf;

const UPDATED_SUFFIX: &str = "_updated";

#[derive(Args)]
pub struct PatchArgs {
    /// Workflow export file to patch (JSON of shape { "data": { ... } })
    #[arg(value_name = "WORKFLOW")]
    pub workflow: PathBuf,

    /// Destination for the patched export (default: <WORKFLOW stem>_updated.json beside the input)
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Name of the node whose code parameter is rewritten (default: Build Digest)
    #[arg(long, value_name = "NAME")]
    pub node: Option<String>,

    /// Inject this file's contents instead of the built-in digest code
    #[arg(long, value_name = "FILE", help_heading = "Code Overrides")]
    pub code_file: Option<PathBuf>,

    /// Pretty-print the output instead of compact JSON
    #[arg(long, help_heading = "Output Options")]
    pub pretty: bool,

    /// Enable verbose diagnostics on stderr
    #[arg(long, help_heading = "Output Options")]
    pub verbose: bool,
}

impl PatchArgs {
    /// Output path: `--out` when given, otherwise a sibling of the input named
    /// after its stem plus `_updated.json`.
    pub fn resolved_out_path(&self) -> PathBuf {
        match &self.out {
            Some(path) => path.clone(),
            None => {
                let stem = self
                    .workflow
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("workflow");
                self.workflow
                    .with_file_name(format!("{stem}{UPDATED_SUFFIX}.json"))
            }
        }
    }
}

#[derive(Args)]
pub struct NodesArgs {
    /// Workflow export file to inspect
    #[arg(value_name = "WORKFLOW")]
    pub workflow: PathBuf,
}

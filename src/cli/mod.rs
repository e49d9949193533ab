pub mod args;
pub mod commands;

pub use args::{NodesArgs, PatchArgs};
use clap::{Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
WORKFLOW COMMANDS:\n{subcommands}\n";

#[derive(Parser)]
#[command(name = "wfpatch")]
#[command(version = crate::VERSION)]
#[command(about = "Patch embedded code parameters in workflow automation exports")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: list nodes to confirm the target name, then patch into a new export file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Rewrite the code parameter of the target node and write a narrowed export",
        long_about = "Patch loads the export, replaces parameters.jsCode on every node whose name matches the target, and writes a new export holding only the name, nodes, connections, settings, and staticData fields.",
        after_help = "Example:\n    wfpatch patch wf02_full.json --out wf02_updated.json"
    )]
    Patch(PatchArgs),
    #[command(
        about = "List the nodes of a workflow export",
        long_about = "Nodes prints one line per node so the operator can confirm the target name before patching. Nodes carrying a jsCode parameter are marked.",
        after_help = "Example:\n    wfpatch nodes wf02_full.json"
    )]
    Nodes(NodesArgs),
}

impl Args {
    /// Whether the selected command asked for verbose diagnostics.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Command::Patch(args) => args.verbose,
            Command::Nodes(_) => false,
        }
    }
}

pub fn run(args: Args) -> crate::Result<()> {
    match args.command {
        Command::Patch(patch_args) => commands::patch(patch_args),
        Command::Nodes(nodes_args) => commands::nodes(nodes_args),
    }
}

use clap::{error::ErrorKind, Parser};
use std::path::PathBuf;
use wfpatch::cli::{Args, Command};

fn parse_command(argv: &[&str]) -> Command {
    Args::try_parse_from(argv)
        .unwrap_or_else(|err| panic!("expected parse success for {:?}: {err}", argv))
        .command
}

#[test]
fn patch_parses_positional_workflow_and_out() {
    let Command::Patch(patch) = parse_command(&[
        "wfpatch",
        "patch",
        "wf02_full.json",
        "--out",
        "wf02_updated.json",
    ]) else {
        panic!("expected patch command");
    };

    assert_eq!(patch.workflow, PathBuf::from("wf02_full.json"));
    assert_eq!(patch.out, Some(PathBuf::from("wf02_updated.json")));
    assert_eq!(patch.node, None);
    assert_eq!(patch.code_file, None);
    assert!(!patch.pretty);
    assert!(!patch.verbose);
}

#[test]
fn patch_default_out_path_derives_from_input_stem() {
    let Command::Patch(patch) = parse_command(&["wfpatch", "patch", "exports/wf02_full.json"])
    else {
        panic!("expected patch command");
    };

    assert_eq!(
        patch.resolved_out_path(),
        PathBuf::from("exports/wf02_full_updated.json")
    );
}

#[test]
fn patch_explicit_out_wins_over_derived_path() {
    let Command::Patch(patch) = parse_command(&[
        "wfpatch",
        "patch",
        "wf02_full.json",
        "--out",
        "elsewhere/result.json",
    ]) else {
        panic!("expected patch command");
    };

    assert_eq!(
        patch.resolved_out_path(),
        PathBuf::from("elsewhere/result.json")
    );
}

#[test]
fn patch_accepts_node_and_code_file_overrides() {
    let Command::Patch(patch) = parse_command(&[
        "wfpatch",
        "patch",
        "wf.json",
        "--node",
        "Send Digest",
        "--code-file",
        "replacement.js",
        "--pretty",
    ]) else {
        panic!("expected patch command");
    };

    assert_eq!(patch.node.as_deref(), Some("Send Digest"));
    assert_eq!(patch.code_file, Some(PathBuf::from("replacement.js")));
    assert!(patch.pretty);
}

#[test]
fn patch_rejects_missing_workflow_argument() {
    let err = match Args::try_parse_from(["wfpatch", "patch"]) {
        Ok(_) => panic!("expected parser to reject missing workflow path"),
        Err(err) => err,
    };
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn nodes_parses_positional_workflow() {
    let Command::Nodes(nodes) = parse_command(&["wfpatch", "nodes", "wf02_full.json"]) else {
        panic!("expected nodes command");
    };
    assert_eq!(nodes.workflow, PathBuf::from("wf02_full.json"));
}

#[test]
fn verbose_is_read_from_the_selected_command() {
    let args = Args::try_parse_from(["wfpatch", "patch", "wf.json", "--verbose"])
        .expect("parse should succeed");
    assert!(args.verbose());

    let args = Args::try_parse_from(["wfpatch", "nodes", "wf.json"]).expect("parse should succeed");
    assert!(!args.verbose());
}

use super::Cli;
use crate::project_identity;
use clap::{CommandFactory, Parser};

#[test]
fn parser_takes_single_args_file() {
    let parsed = Cli::try_parse_from([project_identity::BINARY_NAME, "/tmp/args.json"])
        .expect("args file should parse");
    assert_eq!(parsed.args_file.to_str(), Some("/tmp/args.json"));
    assert_eq!(parsed.asdf_bin, "asdf");
}

#[test]
fn parser_rejects_missing_args_file() {
    assert!(Cli::try_parse_from([project_identity::BINARY_NAME]).is_err());
}

#[test]
fn parser_rejects_extra_positionals() {
    let parsed = Cli::try_parse_from([project_identity::BINARY_NAME, "a.json", "b.json"]);
    assert!(parsed.is_err());
}

#[test]
fn parser_accepts_binary_override_and_verbose() {
    let parsed = Cli::try_parse_from([
        project_identity::BINARY_NAME,
        "-v",
        "--asdf-bin",
        "/opt/asdf/bin/asdf",
        "args.json",
    ])
    .expect("flags should parse");
    assert!(parsed.verbose);
    assert_eq!(parsed.asdf_bin, "/opt/asdf/bin/asdf");
}

#[test]
fn env_names_match_identity() {
    let cmd = Cli::command();
    let env_of = |id: &str| {
        cmd.get_arguments()
            .find(|a| a.get_id().as_str() == id)
            .and_then(|a| a.get_env())
            .map(|e| e.to_string_lossy().into_owned())
    };
    assert_eq!(env_of("verbose").as_deref(), Some(project_identity::ENV_VERBOSE));
    assert_eq!(env_of("asdf_bin").as_deref(), Some(project_identity::ENV_BINARY));
}

#[test]
fn command_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn command_name_matches_identity() {
    assert_eq!(Cli::command().get_name(), project_identity::BINARY_NAME);
}

//! Tests for config, completions, manpage.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

#[test]
fn cli_parse_config() {
    match parse(&["hlsembed", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["hlsembed", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_completions_unknown_shell() {
    assert!(Cli::try_parse_from(["hlsembed", "completions", "cmd"]).is_err());
}

#[test]
fn cli_parse_manpage() {
    match parse(&["hlsembed", "manpage"]) {
        CliCommand::Manpage => {}
        _ => panic!("expected Manpage"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

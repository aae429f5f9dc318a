//! Tests for command-line parsing

use clap::Parser;
use rstest::rstest;

use bmad::cli::{Cli, Commands, InstallArgs};
use bmad::domain::Ide;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("bmad").chain(args.iter().copied()))
}

fn install_args(args: &[&str]) -> InstallArgs {
    match parse(args).expect("valid command line").command {
        Some(Commands::Install(install)) => install,
        other => panic!("expected install command, got {other:?}"),
    }
}

#[rstest]
#[case::bare(&["install"], true)]
#[case::directory_only(&["install", "-d", "/tmp/x"], true)]
#[case::ides_only(&["install", "-i", "cursor"], true)]
#[case::full(&["install", "--full"], false)]
#[case::full_short(&["install", "-f", "-d", "x"], false)]
#[case::agent(&["install", "--agent", "dev"], false)]
#[case::agent_short(&["install", "-a", "dev", "-i", "roo"], false)]
#[case::full_and_agent(&["install", "-f", "-a", "dev"], false)]
fn given_install_flags_when_parsing_then_interactive_only_without_full_or_agent(
    #[case] args: &[&str],
    #[case] interactive: bool,
) {
    assert_eq!(install_args(args).is_interactive(), interactive);
}

#[test]
fn given_ide_values_in_one_and_several_flags_when_parsing_then_collects_all() {
    let install = install_args(&["install", "-f", "--ide", "cursor", "claude-code", "-i", "windsurf"]);

    assert_eq!(install.ides, vec![Ide::Cursor, Ide::ClaudeCode, Ide::Windsurf]);
}

#[test]
fn given_unknown_ide_when_parsing_then_rejects_command_line() {
    let err = parse(&["install", "--full", "--ide", "vscode"]).unwrap_err();

    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    assert!(err.to_string().contains("vscode"));
}

#[test]
fn given_update_flags_when_parsing_then_records_them() {
    let cli = parse(&["update", "--force", "--dry-run"]).unwrap();

    match cli.command {
        Some(Commands::Update { force, dry_run }) => {
            assert!(force);
            assert!(dry_run);
        }
        other => panic!("expected update command, got {other:?}"),
    }
}

#[rstest]
#[case::list(&["list"])]
#[case::status(&["status"])]
#[case::completion(&["completion", "bash"])]
fn given_simple_subcommand_when_parsing_then_accepts_it(#[case] args: &[&str]) {
    assert!(parse(args).unwrap().command.is_some());
}

#[test]
fn given_version_flags_when_parsing_then_sets_version() {
    assert!(parse(&["--version"]).unwrap().version);
    assert!(parse(&["-V"]).unwrap().version);
}

#[test]
fn given_no_arguments_when_parsing_then_has_no_command() {
    let cli = parse(&[]).unwrap();

    assert!(cli.command.is_none());
    assert!(!cli.version);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn given_repeated_verbose_flag_after_subcommand_when_parsing_then_counts_it() {
    let cli = parse(&["status", "-vv"]).unwrap();

    assert_eq!(cli.verbose, 2);
}

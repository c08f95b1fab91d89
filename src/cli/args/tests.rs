use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::KindArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["issue-search"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(!parsed.is_headless());
	assert_eq!(parsed.verbose, 0);
}

#[test]
fn search_flags_are_parsed() {
	let cli = CliArgs::parse_from([
		"issue-search",
		"-r",
		"octocat/hello-world",
		"-q",
		"crash on startup",
		"-k",
		"pr",
		"--once",
		"-o",
		"json",
		"-vv",
	]);
	assert_eq!(cli.repo.as_deref(), Some("octocat/hello-world"));
	assert_eq!(cli.query.as_deref(), Some("crash on startup"));
	assert_eq!(cli.kind, Some(KindArg::Pr));
	assert_eq!(cli.output, OutputFormat::Json);
	assert_eq!(cli.verbose, 2);
	assert!(cli.is_headless());
}

#[test]
fn headless_modes_are_exclusive() {
	let result = CliArgs::try_parse_from(["issue-search", "--once", "--status"]);
	assert!(result.is_err());
}

#[test]
fn item_lookup_is_a_headless_mode() {
	let cli = CliArgs::parse_from(["issue-search", "--item", "issue:42", "-o", "json"]);
	assert_eq!(cli.item.as_deref(), Some("issue:42"));
	assert!(cli.is_headless());
	assert!(CliArgs::try_parse_from(["issue-search", "--item", "issue:42", "--once"]).is_err());
}

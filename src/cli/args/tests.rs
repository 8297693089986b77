use clap::{CommandFactory, FromArgMatches};

use super::options::CategoryArg;
use super::{CliArgs, OutputFormat};

fn parse(args: &[&str]) -> CliArgs {
	let mut matches = CliArgs::command().get_matches_from(args);
	CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
}

#[test]
fn command_has_about_and_long_version() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
	let version = command.get_long_version().expect("long version").to_string();
	assert!(version.contains("config directory:"));
	assert!(version.contains("log directory:"));
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = parse(&["docsift"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.query.is_none());
	assert!(!parsed.once);
}

#[test]
fn query_category_and_kinds_are_parsed() {
	let parsed = parse(&[
		"docsift",
		"serve",
		"--category",
		"symbols",
		"--kinds",
		"function,typeAlias",
		"--page",
		"3",
		"--once",
		"-o",
		"json",
	]);
	assert_eq!(parsed.query.as_deref(), Some("serve"));
	assert_eq!(parsed.category, Some(CategoryArg::Symbols));
	assert_eq!(
		parsed.kinds,
		Some(vec!["function".to_string(), "typeAlias".to_string()])
	);
	assert_eq!(parsed.page, Some(3));
	assert!(parsed.once);
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn page_zero_is_rejected() {
	let result = CliArgs::command().try_get_matches_from(["docsift", "--page", "0"]);
	assert!(result.is_err());
}

#[test]
fn config_flag_is_repeatable() {
	let parsed = parse(&["docsift", "-c", "a.toml", "--config", "b.toml"]);
	assert_eq!(parsed.config.len(), 2);
}

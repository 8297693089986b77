use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{CategoryArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `docsift` binary.
#[derive(Parser, Debug)]
#[command(
	name = "docsift",
	version,
	long_version = long_version(),
	about = "Search overlay for manual pages, API symbols and modules",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(value_name = "QUERY", help = "Initial search text (default: empty)")]
	pub(crate) query: Option<String>,
	#[arg(
		short = 't',
		long,
		value_enum,
		help = "Category tab to start on (default: all)"
	)]
	pub(crate) category: Option<CategoryArg>,
	#[arg(
		long,
		value_name = "N",
		value_parser = clap::value_parser!(u32).range(1..),
		help = "Result page to start on, counted from 1 (default: 1)"
	)]
	pub(crate) page: Option<u32>,
	#[arg(
		short = 'k',
		long,
		value_delimiter = ',',
		value_name = "KIND",
		help = "Comma-separated symbol kinds to keep checked (default: all)"
	)]
	pub(crate) kinds: Option<Vec<String>>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "loading-delay",
		value_name = "MS",
		help = "Milliseconds before a slow search clears the results (default: 500)"
	)]
	pub(crate) loading_delay_ms: Option<u64>,
	#[arg(
		long = "no-analytics",
		help = "Do not report result clicks (default: report when configured)"
	)]
	pub(crate) no_analytics: bool,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DOCSIFT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long,
		help = "Run one search, print the results and exit without a terminal UI (default: disabled)"
	)]
	pub(crate) once: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'v',
		long,
		help = "Write debug output to the log file (default: disabled)"
	)]
	pub(crate) verbose: bool,
}

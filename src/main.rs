mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{
	CliArgs, OutputFormat, parse_cli, print_json, print_plain, print_results_json,
	print_results_plain,
};
use docsift::logging;
use settings::ResolvedConfig;
use tracing::debug;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in docsift_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if let Some(path) = logging::initialize(cli.verbose) {
		debug!(log = %path.display(), "logging initialized");
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.once {
		return run_once(&cli, &resolved);
	}

	run_search(cli.output, resolved)
}

/// Execute the search workflow and print output in the chosen format.
fn run_search(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

/// Run one search without the overlay and print the result bag.
fn run_once(cli: &CliArgs, settings: &ResolvedConfig) -> Result<()> {
	let results = workflow::run_once(settings)?;

	match cli.output {
		OutputFormat::Plain => print_results_plain(&results),
		OutputFormat::Json => print_results_json(&results)?,
	}

	Ok(())
}

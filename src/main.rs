mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, parse_cli, print_outcome};
use logging::LogTarget;
use workflow::{HeadlessMode, SearchWorkflow};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in issue_search_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let target = if cli.is_headless() {
		LogTarget::Stderr
	} else {
		LogTarget::default_file()?
	};
	logging::initialize(cli.verbose, &target)?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = SearchWorkflow::from_config(resolved)?;
	match headless_mode(&cli) {
		Some(mode) => workflow.run_headless(mode, cli.output),
		None => {
			let outcome = workflow.run_interactive()?;
			print_outcome(&outcome, cli.output)
		}
	}
}

fn headless_mode(cli: &CliArgs) -> Option<HeadlessMode> {
	if cli.once {
		Some(HeadlessMode::Once)
	} else if cli.status {
		Some(HeadlessMode::Status)
	} else if cli.ingest {
		Some(HeadlessMode::Ingest)
	} else if let Some(id) = &cli.item {
		Some(HeadlessMode::Item(id.clone()))
	} else {
		None
	}
}

use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{KindArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `issue-search` binary.
#[derive(Parser, Debug)]
#[command(
	name = "issue-search",
	version,
	long_version = long_version(),
	about = "Search a GitHub repository's issues, pull requests and comments by describing a problem",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "ISSUE_SEARCH_CONFIG",
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
		short = 'a',
		long = "api-base",
		value_name = "URL",
		help = "Origin of the search backend (default: http://localhost:8000)"
	)]
	pub(crate) api_base: Option<String>,
	#[arg(
		long,
		value_name = "SECS",
		help = "Per-request timeout in seconds (default: 30)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 'r',
		long,
		value_name = "REPO",
		help = "Repository to search, owner/name or GitHub URL (default: empty)"
	)]
	pub(crate) repo: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "TEXT",
		help = "Describe the issue to search for (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'k',
		long,
		value_enum,
		help = "Only return results of this type (default: all)"
	)]
	pub(crate) kind: Option<KindArg>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long,
		conflicts_with_all = ["status", "ingest", "item"],
		help = "Run a single search without the terminal UI and print the results"
	)]
	pub(crate) once: bool,
	#[arg(
		long,
		conflicts_with_all = ["ingest", "item"],
		help = "Print the backend's ingest status for --repo and exit"
	)]
	pub(crate) status: bool,
	#[arg(
		long,
		conflicts_with = "item",
		help = "Ask the backend to (re)ingest --repo and exit"
	)]
	pub(crate) ingest: bool,
	#[arg(
		long,
		value_name = "ID",
		help = "Print the full stored record of one hit, e.g. issue:42, and exit"
	)]
	pub(crate) item: Option<String>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how headless modes print their result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Raise the log level; repeat for more detail (default: warn)"
	)]
	pub(crate) verbose: u8,
}

impl CliArgs {
	/// True when a mode that never starts the terminal UI was requested.
	pub(crate) fn is_headless(&self) -> bool {
		self.once || self.status || self.ingest || self.item.is_some()
	}
}

use std::sync::Arc;

use anyhow::{Context, Result, anyhow, ensure};
use issue_search_core::{HttpSearchClient, ItemId, SearchBackend};
use issue_search_tui::{App, AppOutcome, style};
use log::info;

use crate::cli::{OutputFormat, print_ingest, print_item, print_response, print_status};
use crate::settings::ResolvedConfig;

/// Modes that talk to the backend once and exit without a terminal UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HeadlessMode {
	Once,
	Status,
	Ingest,
	/// Look up one stored record by its hit id.
	Item(String),
}

/// Coordinates building and running either the interactive search screen or
/// one of the headless modes.
pub(crate) struct SearchWorkflow {
	config: ResolvedConfig,
	client: HttpSearchClient,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let client =
			HttpSearchClient::new(&config.client).context("failed to set up the search client")?;
		Ok(Self { config, client })
	}

	/// Open the terminal UI with the configured form contents.
	pub(crate) fn run_interactive(self) -> Result<AppOutcome> {
		let theme = match self.config.theme.as_deref() {
			Some(name) => Some(
				style::by_name(name).ok_or_else(|| anyhow!("unknown theme `{name}`"))?,
			),
			None => None,
		};

		let initial = self.config.initial.clone();
		let ready = !initial.repo.trim().is_empty() && !initial.query.trim().is_empty();
		info!("starting terminal UI against {}", self.client.api_base());

		let backend: Arc<dyn SearchBackend> = Arc::new(self.client);
		let mut app = App::new(backend)
			.with_initial(initial)
			.submit_on_start(ready);
		if let Some(theme) = theme {
			app.set_theme(theme);
		}
		issue_search_tui::run(app)
	}

	/// Run one headless request and print its outcome.
	pub(crate) fn run_headless(&self, mode: HeadlessMode, format: OutputFormat) -> Result<()> {
		let request = &self.config.initial;
		match mode {
			HeadlessMode::Once => {
				info!("headless search repo={:?} query={:?}", request.repo, request.query);
				let response = self
					.client
					.search(request)
					.map_err(|err| anyhow!("search failed: {err}"))?;
				print_response(&response, format)
			}
			HeadlessMode::Status => {
				let repo = required_repo(&request.repo, "--status")?;
				let status = self
					.client
					.status(repo)
					.with_context(|| format!("failed to fetch status for {repo}"))?;
				print_status(&status, format)
			}
			HeadlessMode::Ingest => {
				let repo = required_repo(&request.repo, "--ingest")?;
				let receipt = self
					.client
					.ingest(repo)
					.with_context(|| format!("failed to request ingest for {repo}"))?;
				print_ingest(&receipt, format)
			}
			HeadlessMode::Item(id) => {
				let id = id.trim();
				ensure!(!id.is_empty(), "--item needs an id such as issue:42");
				let detail = self
					.client
					.item(&ItemId::Text(id.to_string()))
					.map_err(|err| anyhow!("failed to fetch {id}: {err}"))?;
				print_item(&detail, format)
			}
		}
	}
}

fn required_repo<'a>(repo: &'a str, flag: &str) -> Result<&'a str> {
	let repo = repo.trim();
	ensure!(!repo.is_empty(), "{flag} needs a repository; pass --repo");
	Ok(repo)
}

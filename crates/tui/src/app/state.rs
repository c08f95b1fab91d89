//! Core state container for the terminal application's front-end.
//!
//! The `app` module exposes the [`App`] struct which bundles together the
//! search form, the search session, and UI-specific state.

use std::sync::Arc;
use std::time::Instant;

use issue_search_core::{ResultItem, SearchBackend, SearchRequest, SearchSession};
use throbber_widgets_tui::ThrobberState;

use super::form::FormState;
use super::links::{LinkOpener, open_in_browser};
use super::notice::Notice;
use super::results::ResultsState;
use super::search::SearchRuntime;
use crate::config::UiLabels;
use crate::style::{StyleConfig, Theme};

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

/// What the user left the application with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOutcome {
	/// True when the user confirmed a result with Enter.
	pub accepted: bool,
	/// Form contents at exit.
	pub request: SearchRequest,
	/// Hit under the cursor when the user accepted.
	pub selection: Option<ResultItem>,
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub(crate) form: FormState<'a>,
	pub(crate) session: SearchSession,
	pub(crate) search: SearchRuntime,
	pub(crate) results: ResultsState,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) notice: Option<Notice>,
	pub(crate) link_opener: LinkOpener,
	pub(crate) submit_on_start: bool,
}

impl<'a> App<'a> {
	/// Construct an [`App`] with empty fields that searches through `backend`.
	pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
		let ui = UiLabels::default();
		let style = StyleConfig::default();
		let form = FormState::new(&SearchRequest::default(), &ui, &style.theme);

		Self {
			form,
			session: SearchSession::new(),
			search: SearchRuntime::spawn(backend),
			results: ResultsState::default(),
			ui,
			style,
			throbber_state: ThrobberState::default(),
			notice: None,
			link_opener: open_in_browser,
			submit_on_start: false,
		}
	}

	/// Pre-fill the form.
	#[must_use]
	pub fn with_initial(mut self, request: SearchRequest) -> Self {
		self.form = FormState::new(&request, &self.ui, &self.style.theme);
		self
	}

	/// Run the pre-filled search as soon as the event loop starts.
	#[must_use]
	pub fn submit_on_start(mut self, enabled: bool) -> Self {
		self.submit_on_start = enabled;
		self
	}

	/// Replace the function used to open result links.
	#[must_use]
	pub fn with_link_opener(mut self, opener: LinkOpener) -> Self {
		self.link_opener = opener;
		self
	}

	/// Apply a new theme.
	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
		self.form.apply_placeholders(&self.ui, &self.style.theme);
	}

	/// Hit under the cursor, if any.
	pub(crate) fn selected_item(&self) -> Option<&ResultItem> {
		self.session.results().get(self.results.selected()?)
	}

	pub(crate) fn result_count(&self) -> usize {
		self.session.results().len()
	}

	pub(crate) fn outcome(&self, accepted: bool) -> AppOutcome {
		AppOutcome {
			accepted,
			request: self.form.request(),
			selection: if accepted {
				self.selected_item().cloned()
			} else {
				None
			},
		}
	}

	/// Drop the notice once it has been on screen long enough.
	pub(crate) fn prune_notice(&mut self, now: Instant) {
		if self
			.notice
			.as_ref()
			.is_some_and(|notice| notice.is_expired(now))
		{
			self.notice = None;
		}
	}

	/// Whether the submit-on-start search is still owed.
	pub(crate) fn needs_initial_search(&self) -> bool {
		self.submit_on_start && self.session.latest_id() == 0
	}
}

//! Input form: the repository and query fields plus the type filter.

use issue_search_core::{ResultKind, SearchRequest};
use ratatui::crossterm::event::KeyEvent;

use crate::config::UiLabels;
use crate::input::TextInput;
use crate::style::Theme;

/// Which widget receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Repo,
	Query,
	Results,
}

impl Focus {
	#[must_use]
	pub fn next(self) -> Self {
		match self {
			Self::Repo => Self::Query,
			Self::Query => Self::Results,
			Self::Results => Self::Repo,
		}
	}

	#[must_use]
	pub fn previous(self) -> Self {
		match self {
			Self::Repo => Self::Results,
			Self::Query => Self::Repo,
			Self::Results => Self::Query,
		}
	}
}

pub(crate) struct FormState<'a> {
	pub repo: TextInput<'a>,
	pub query: TextInput<'a>,
	pub kind: Option<ResultKind>,
	pub focus: Focus,
}

impl<'a> FormState<'a> {
	pub fn new(initial: &SearchRequest, labels: &UiLabels, theme: &Theme) -> Self {
		let mut form = Self {
			repo: TextInput::new(initial.repo.clone()),
			query: TextInput::new(initial.query.clone()),
			kind: initial.kind.clone(),
			focus: Focus::default(),
		};
		form.apply_placeholders(labels, theme);
		form.set_focus(Focus::default());
		form
	}

	pub fn apply_placeholders(&mut self, labels: &UiLabels, theme: &Theme) {
		let style = theme.empty_style();
		self.repo.set_placeholder(&labels.repo.placeholder, style);
		self.query.set_placeholder(&labels.query.placeholder, style);
	}

	/// Snapshot the fields into a request. Values are forwarded verbatim.
	pub fn request(&self) -> SearchRequest {
		SearchRequest::new(self.repo.text(), self.query.text()).with_kind(self.kind.clone())
	}

	pub fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		self.repo.set_focused(focus == Focus::Repo);
		self.query.set_focused(focus == Focus::Query);
	}

	/// Advance the type filter: all → issue → pr → comment → all.
	pub fn cycle_kind(&mut self) {
		self.kind = ResultKind::next_filter(self.kind.as_ref());
	}

	/// Label of the active type filter.
	pub fn kind_label(&self) -> &str {
		self.kind.as_ref().map_or("all", ResultKind::label)
	}

	/// Route a key to the focused text field. Returns `true` when it edited
	/// the text.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		match self.focus {
			Focus::Repo => self.repo.input(key),
			Focus::Query => self.query.input(key),
			Focus::Results => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	use super::*;

	fn form(repo: &str, query: &str) -> FormState<'static> {
		FormState::new(
			&SearchRequest::new(repo, query),
			&UiLabels::default(),
			&Theme::default(),
		)
	}

	fn type_text(form: &mut FormState<'_>, text: &str) {
		for ch in text.chars() {
			form.input(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
		}
	}

	#[test]
	fn request_mirrors_fields_verbatim() {
		let mut form = form("", "");
		type_text(&mut form, " octocat/hello-world ");
		form.set_focus(Focus::Query);
		type_text(&mut form, "crash on startup");

		let request = form.request();
		assert_eq!(request.repo, " octocat/hello-world ");
		assert_eq!(request.query, "crash on startup");
		assert_eq!(request.kind, None);
	}

	#[test]
	fn empty_fields_still_build_a_request() {
		let request = form("", "").request();
		assert_eq!(request, SearchRequest::new("", ""));
	}

	#[test]
	fn results_focus_ignores_text_keys() {
		let mut form = form("a/b", "x");
		form.set_focus(Focus::Results);
		assert!(!form.input(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE)));
		assert_eq!(form.request(), SearchRequest::new("a/b", "x"));
	}

	#[test]
	fn kind_filter_is_carried_into_the_request() {
		let mut form = form("a/b", "x");
		assert_eq!(form.kind_label(), "all");
		form.cycle_kind();
		form.cycle_kind();
		assert_eq!(form.kind_label(), "pr");
		assert_eq!(form.request().kind, Some(ResultKind::PullRequest));
	}

	#[test]
	fn focus_cycles_in_both_directions() {
		assert_eq!(Focus::Repo.next().next().next(), Focus::Repo);
		assert_eq!(Focus::Repo.previous(), Focus::Results);
	}
}

pub(crate) mod layout;

use issue_search_core::display::result_views;
use layout::split_screen;
use ratatui::Frame;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use super::App;
use super::form::Focus;
use crate::components::{
	FieldContext, ResultsContext, StatusContext, render_field, render_heading, render_results,
	render_status,
};

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let areas = split_screen(frame.area());
		let theme = self.style.theme;

		render_heading(frame, areas.heading, &self.ui, &theme);
		render_field(
			frame,
			areas.repo,
			FieldContext {
				labels: &self.ui.repo,
				input: &self.form.repo,
				focused: self.form.focus == Focus::Repo,
				theme: &theme,
			},
		);
		render_field(
			frame,
			areas.query,
			FieldContext {
				labels: &self.ui.query,
				input: &self.form.query,
				focused: self.form.focus == Focus::Query,
				theme: &theme,
			},
		);

		render_status(
			frame,
			areas.status,
			StatusContext {
				loading: self.session.is_loading(),
				error: self.session.error(),
				notice: self
					.notice
					.as_ref()
					.map(|notice| (notice.message.as_str(), notice.is_error)),
				completed: self.session.has_completed(),
				count: self.session.results().len(),
				total: self.session.total(),
				kind_label: self.form.kind_label(),
				labels: &self.ui,
				throbber_state: &self.throbber_state,
				theme: &theme,
			},
		);

		self.results.ensure_selection(self.session.results().len());
		let views = result_views(self.session.results());
		let placeholder = if self.session.is_loading() && views.is_empty() {
			&self.ui.searching_label
		} else if self.session.has_completed() {
			&self.ui.empty_results
		} else {
			&self.ui.start_hint
		};
		render_results(
			frame,
			areas.results,
			&mut self.results.list_state,
			ResultsContext {
				views: &views,
				title: &self.ui.results_title,
				placeholder,
				focused: self.form.focus == Focus::Results,
				theme: &theme,
			},
		);

		let help = Paragraph::new(Span::styled(self.ui.key_hint.as_str(), theme.empty_style()));
		frame.render_widget(help, areas.help);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use crate::app::state::tests::{app_for, settle};

	#[test]
	fn first_frame_shows_form_and_start_hint() {
		let mut app = app_for("octocat/hello-world", "");
		let mut terminal = Terminal::new(TestBackend::new(90, 20)).expect("terminal");
		terminal.draw(|frame| app.draw(frame)).expect("draw");
		let view = terminal.backend().to_string();

		assert!(view.contains("GitHub Issues Search"));
		assert!(view.contains("octocat/hello-world"));
		assert!(view.contains("Describe your issue"));
		assert!(view.contains("Enter a repository and a description"));
		assert!(view.contains("[Search]"));
	}

	#[test]
	fn settled_search_renders_hits() {
		let mut app = app_for("octocat/hello-world", "crash on startup");
		app.submit();
		settle(&mut app);

		let mut terminal = Terminal::new(TestBackend::new(90, 24)).expect("terminal");
		terminal.draw(|frame| app.draw(frame)).expect("draw");
		let view = terminal.backend().to_string();

		assert!(view.contains("issue • alice"));
		assert!(view.contains("App crashes"));
		assert!(view.contains("View on GitHub https://github.com/a/b/issues/1"));
		assert!(view.contains("2 results"));
	}

	#[test]
	fn failed_search_keeps_form_and_shows_error() {
		let mut app = app_for("down/down", "crash");
		app.submit();
		settle(&mut app);

		let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("terminal");
		terminal.draw(|frame| app.draw(frame)).expect("draw");
		let view = terminal.backend().to_string();

		assert!(view.contains("search failed: network error: connection refused"));
		assert!(view.contains("down/down"));
		assert!(!view.contains("Searching..."));
	}
}

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::form::Focus;
use super::state::AppOutcome;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<AppOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Some(self.outcome(false)),
			KeyCode::Char('c') if ctrl => return Some(self.outcome(false)),
			KeyCode::Enter => {
				if self.form.focus == Focus::Results && self.selected_item().is_some() {
					return Some(self.outcome(true));
				}
				self.submit();
			}
			KeyCode::Tab => self.form.set_focus(self.form.focus.next()),
			KeyCode::BackTab => self.form.set_focus(self.form.focus.previous()),
			KeyCode::Char('t') if ctrl => self.form.cycle_kind(),
			KeyCode::Char('o') if ctrl => self.open_selected_link(),
			_ if self.form.focus == Focus::Results => self.handle_results_key(key),
			KeyCode::Up => self.form.set_focus(self.form.focus.previous()),
			KeyCode::Down => self.form.set_focus(self.form.focus.next()),
			_ => {
				self.form.input(key);
			}
		}
		None
	}

	fn handle_results_key(&mut self, key: KeyEvent) {
		let len = self.result_count();
		match key.code {
			KeyCode::Up | KeyCode::Char('k') => self.results.select_previous(len),
			KeyCode::Down | KeyCode::Char('j') => self.results.select_next(len),
			KeyCode::Home | KeyCode::Char('g') => self.results.select_first(len),
			KeyCode::End | KeyCode::Char('G') => self.results.select_last(len),
			KeyCode::PageUp => self.results.page_up(len),
			KeyCode::PageDown => self.results.page_down(len),
			KeyCode::Char('o') => self.open_selected_link(),
			_ => {}
		}
	}
}

//! Single-line text input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Editable one-line text field.
///
/// Newline insertion is swallowed so the field always holds exactly one line;
/// `Enter` is left to the caller (it submits the form).
pub struct TextInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> TextInput<'a> {
	/// Create an input pre-filled with `initial`, cursor at the end.
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	/// Text shown while the field is empty.
	pub fn set_placeholder(&mut self, text: &str, style: Style) {
		self.textarea.set_placeholder_text(text);
		self.textarea.set_placeholder_style(style);
	}

	/// Show the cursor only while the field has focus.
	pub fn set_focused(&mut self, focused: bool) {
		let style = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn is_line_break(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_after_initial_text() {
		let mut input = TextInput::new("octo");
		assert!(input.input(key(KeyCode::Char('c'))));
		assert_eq!(input.text(), "octoc");
	}

	#[test]
	fn enter_never_inserts_a_line() {
		let mut input = TextInput::new("a/b");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "a/b");
	}

	#[test]
	fn empty_input_reports_empty_text() {
		let mut input = TextInput::new("");
		assert_eq!(input.text(), "");
		assert!(!input.input(key(KeyCode::Backspace)));
	}
}

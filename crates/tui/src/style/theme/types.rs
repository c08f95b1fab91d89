use ratatui::style::{Color, Style};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for header elements and borders.
	pub header: Style,
	/// Style for the selected result.
	pub row_highlight: Style,
	/// Style for prompt labels and the focused input border.
	pub prompt: Style,
	/// Style for placeholders, hints and metadata.
	pub empty: Style,
	/// Style for result titles.
	pub highlight: Style,
	/// Style for failure messages.
	pub error: Style,
	/// Style for outbound links.
	pub link: Style,
}

impl Theme {
	/// Returns the style for muted text such as placeholders.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Returns the style for the focused widget's border.
	#[must_use]
	pub fn focus_border_style(&self) -> Style {
		Style::new().fg(self.prompt.fg.unwrap_or(Color::Reset))
	}

	/// Returns the style for unfocused widget borders.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.empty.fg.unwrap_or(Color::Reset))
	}
}

/// Describes a theme instance bundled with the UI.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: &'static str,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<&'static str>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: &'static str) -> Self {
		self.aliases.push(alias);
		self
	}
}

use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::types::{Theme, ThemeRegistration};

pub const SLATE: Theme = Theme {
	header: Style::new().fg(Color::Rgb(148, 163, 184)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(56, 189, 248)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
	highlight: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(248, 113, 113)),
	link: Style::new()
		.fg(Color::Rgb(125, 211, 252))
		.add_modifier(Modifier::UNDERLINED),
};

pub const LIGHT: Theme = Theme {
	header: Style::new().fg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(185, 28, 28)),
	link: Style::new()
		.fg(Color::Rgb(0, 102, 204))
		.add_modifier(Modifier::UNDERLINED),
};

pub const SOLARIZED: Theme = Theme {
	header: Style::new().fg(Color::Rgb(147, 161, 161)),
	row_highlight: Style::new()
		.bg(Color::Rgb(7, 54, 66))
		.fg(Color::Rgb(181, 137, 0)),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	highlight: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(220, 50, 47)),
	link: Style::new()
		.fg(Color::Rgb(42, 161, 152))
		.add_modifier(Modifier::UNDERLINED),
};

/// Get the default built-in theme.
pub fn default_theme() -> Theme {
	SLATE
}

pub(super) fn registrations() -> Vec<ThemeRegistration> {
	vec![
		ThemeRegistration::new("slate", SLATE).alias("dark"),
		ThemeRegistration::new("light", LIGHT),
		ThemeRegistration::new("solarized", SOLARIZED).alias("solarized-dark"),
	]
}

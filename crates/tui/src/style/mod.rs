//! Visual styling utilities.
//!
//! Themes hold the colour scheme of the terminal UI; [`StyleConfig`] is the
//! container the application reads them from.

pub mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

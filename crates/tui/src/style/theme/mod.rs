mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations()
}

/// Canonical names of every built-in theme, in registration order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtins::registrations()
		.into_iter()
		.map(|registration| registration.name)
		.collect()
}

/// Look a theme up by name or alias, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	builtins::registrations()
		.into_iter()
		.find(|registration| {
			normalize_name(registration.name) == wanted
				|| registration
					.aliases
					.iter()
					.any(|alias| normalize_name(alias) == wanted)
		})
		.map(|registration| registration.theme)
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_accepts_aliases_and_case() {
		assert!(by_name("Slate").is_some());
		assert!(by_name(" dark ").is_some());
		assert!(by_name("no-such-theme").is_none());
	}

	#[test]
	fn names_are_unique() {
		let mut all = names();
		let count = all.len();
		all.sort_unstable();
		all.dedup();
		assert_eq!(all.len(), count);
	}
}

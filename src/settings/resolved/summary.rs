use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  API base: {}", config.client.api_base);
	let _ = writeln!(out, "  Timeout: {}s", config.client.timeout.as_secs());
	let _ = writeln!(out, "  User agent: {}", config.client.user_agent);
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	let _ = writeln!(out, "  Repository: {}", or_empty(&config.initial.repo));
	let _ = writeln!(out, "  Query: {}", or_empty(&config.initial.query));
	let _ = writeln!(
		out,
		"  Type filter: {}",
		config
			.initial
			.kind
			.as_ref()
			.map_or("all", |kind| kind.label())
	);
	out
}

fn or_empty(value: &str) -> &str {
	if value.is_empty() { "(empty)" } else { value }
}

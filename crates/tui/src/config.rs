/// Human-readable labels for one of the form fields.
#[derive(Debug, Clone)]
pub struct FieldLabels {
	/// Title drawn on the field's border.
	pub title: String,
	/// Text shown while the field is empty.
	pub placeholder: String,
}

impl FieldLabels {
	/// Construct a new [`FieldLabels`] from its title and placeholder.
	#[must_use]
	pub fn new(title: impl Into<String>, placeholder: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			placeholder: placeholder.into(),
		}
	}
}

/// Textual configuration used when rendering the form, status line and result
/// list.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Heading at the top of the screen.
	pub heading: String,
	/// One-line description under the heading.
	pub tagline: String,
	/// Repository field.
	pub repo: FieldLabels,
	/// Query field.
	pub query: FieldLabels,
	/// Submit button caption while idle.
	pub submit_label: String,
	/// Submit button caption while a search is in flight.
	pub searching_label: String,
	/// Title of the result list.
	pub results_title: String,
	/// Shown in the result list before the first search.
	pub start_hint: String,
	/// Shown in the result list when a search returned nothing.
	pub empty_results: String,
	/// Key reference shown on the last row.
	pub key_hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			heading: "GitHub Issues Search".to_string(),
			tagline: "Search a public repository by describing your issue.".to_string(),
			repo: FieldLabels::new("Repository", "owner/repo or GitHub URL"),
			query: FieldLabels::new("Issue", "Describe your issue"),
			submit_label: "Search".to_string(),
			searching_label: "Searching...".to_string(),
			results_title: "Results".to_string(),
			start_hint: "Enter a repository and a description, then press Enter.".to_string(),
			empty_results: "No results".to_string(),
			key_hint: "Enter search · Tab focus · Ctrl-T type · o open link · Esc quit"
				.to_string(),
		}
	}
}

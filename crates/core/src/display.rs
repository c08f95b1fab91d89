//! Display projection of hits shared by the terminal UI and the headless
//! printer.
//!
//! Everything here is a pure function of its input: identical results always
//! produce identical rows.

use serde::Serialize;

use crate::model::ResultItem;

/// Number of body characters shown before the truncation indicator.
pub const BODY_PREVIEW_CHARS: usize = 200;
/// Appended to every body preview.
pub const TRUNCATION_INDICATOR: &str = "...";
/// Separator between metadata fields.
pub const METADATA_SEPARATOR: &str = " • ";
/// Label shown in front of outbound links.
pub const LINK_LABEL: &str = "View on GitHub";

const UNKNOWN_AUTHOR: &str = "unknown";

/// Display-ready projection of a single hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
	/// Stable row key, the hit's id.
	pub key: String,
	/// `type • author` plus any optional extras.
	pub metadata: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub body: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub link: Option<String>,
}

impl ResultView {
	/// Project one hit.
	#[must_use]
	pub fn from_item(item: &ResultItem) -> Self {
		Self {
			key: item.id.to_string(),
			metadata: metadata_line(item),
			title: item.title.clone(),
			body: item.body.as_deref().map(truncate_body),
			link: item.html_url.clone(),
		}
	}
}

/// Project every hit, preserving order.
#[must_use]
pub fn result_views(items: &[ResultItem]) -> Vec<ResultView> {
	items.iter().map(ResultView::from_item).collect()
}

/// First [`BODY_PREVIEW_CHARS`] characters of `body` followed by
/// [`TRUNCATION_INDICATOR`].
///
/// The slice counts characters rather than bytes and ignores word
/// boundaries. The indicator is appended even when nothing was cut.
#[must_use]
pub fn truncate_body(body: &str) -> String {
	let mut preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
	preview.push_str(TRUNCATION_INDICATOR);
	preview
}

/// `type • author`, extended with the issue number, creation date and labels
/// when the backend supplied them.
#[must_use]
pub fn metadata_line(item: &ResultItem) -> String {
	let mut parts = vec![
		item.kind.label().to_string(),
		item.author.as_deref().unwrap_or(UNKNOWN_AUTHOR).to_string(),
	];
	if let Some(number) = item.issue_number {
		parts.push(format!("#{number}"));
	}
	if let Some(created_at) = item.created_at.as_deref().filter(|value| !value.is_empty()) {
		parts.push(created_at.to_string());
	}

	let mut line = parts.join(METADATA_SEPARATOR);
	for label in &item.labels {
		line.push_str(" [");
		line.push_str(label);
		line.push(']');
	}
	line
}

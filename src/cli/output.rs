use std::fmt::Write;

use anyhow::Result;
use issue_search_core::{IngestReceipt, ItemDetail, RepoStatus, SearchResponse};
use issue_search_core::display::{LINK_LABEL, result_views};
use issue_search_tui::AppOutcome;
use serde_json::{Value, json};

use super::OutputFormat;

/// Plain-text rendering of a search response: one block per hit, in backend
/// order, separated by blank lines.
pub(crate) fn format_response_plain(response: &SearchResponse) -> String {
	let views = result_views(&response.hits);
	if views.is_empty() {
		return "No results\n".to_string();
	}

	let mut out = String::new();
	for (index, view) in views.iter().enumerate() {
		if index > 0 {
			out.push('\n');
		}
		let _ = writeln!(out, "{}", view.metadata);
		if let Some(title) = &view.title {
			let _ = writeln!(out, "{title}");
		}
		if let Some(body) = &view.body {
			let _ = writeln!(out, "{body}");
		}
		if let Some(link) = &view.link {
			let _ = writeln!(out, "{LINK_LABEL} {link}");
		}
	}
	out
}

pub(crate) fn format_response_json(response: &SearchResponse) -> Result<String> {
	let payload = json!({
		"repo": response.repo,
		"query": response.query,
		"total": response.total,
		"hits": response.hits,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the response of a headless search.
pub(crate) fn print_response(response: &SearchResponse, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => print!("{}", format_response_plain(response)),
		OutputFormat::Json => println!("{}", format_response_json(response)?),
	}
	Ok(())
}

pub(crate) fn print_status(status: &RepoStatus, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			println!("Repository: {}", status.repo);
			println!(
				"Last ingested: {}",
				status.last_ingested_at.as_deref().unwrap_or("never")
			);
			println!("Issues: {}", status.issues);
			println!("Comments: {}", status.comments);
		}
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(status)?),
	}
	Ok(())
}

pub(crate) fn print_ingest(receipt: &IngestReceipt, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("Ingest {} for {}", receipt.status, receipt.repo),
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(receipt)?),
	}
	Ok(())
}

/// Plain rendering of a stored record: title, `key: value` lines, then the
/// untruncated body.
pub(crate) fn format_item_plain(detail: &ItemDetail) -> String {
	let mut out = String::new();
	if let Some(title) = detail.title() {
		let _ = writeln!(out, "{title}");
	}
	for (key, value) in detail.extra_fields() {
		match value {
			Value::Null => {}
			Value::String(text) => {
				let _ = writeln!(out, "{key}: {text}");
			}
			other => {
				let _ = writeln!(out, "{key}: {other}");
			}
		}
	}
	if let Some(body) = detail.body() {
		let _ = writeln!(out, "\n{body}");
	}
	out
}

pub(crate) fn print_item(detail: &ItemDetail, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => print!("{}", format_item_plain(detail)),
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(detail)?),
	}
	Ok(())
}

/// Format what the user left the terminal UI with.
pub(crate) fn format_outcome_json(outcome: &AppOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"repo": outcome.request.repo,
		"query": outcome.request.query,
		"type": outcome.request.kind.as_ref().map(|kind| kind.label()),
		"selection": outcome.selection,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_outcome(outcome: &AppOutcome, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => match &outcome.selection {
			Some(item) if outcome.accepted => match &item.html_url {
				Some(url) => println!("{url}"),
				None => println!("{}", item.id),
			},
			_ => {}
		},
		OutputFormat::Json => println!("{}", format_outcome_json(outcome)?),
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use issue_search_core::{ItemId, ResultItem, ResultKind, SearchRequest};
	use serde_json::Value;

	use super::*;

	fn response() -> SearchResponse {
		SearchResponse::from_hits(vec![
			ResultItem::new(ItemId::Number(1), ResultKind::Issue, "alice")
				.with_title("App crashes")
				.with_body("Steps to reproduce..."),
			ResultItem::new(ItemId::Text("c-9".into()), ResultKind::Comment, "bob")
				.with_html_url("https://github.com/a/b/issues/1#issuecomment-9"),
		])
	}

	#[test]
	fn plain_output_lists_hits_in_order() {
		let text = format_response_plain(&response());
		assert_eq!(
			text,
			"issue • alice\nApp crashes\nSteps to reproduce......\n\n\
			 comment • bob\nView on GitHub https://github.com/a/b/issues/1#issuecomment-9\n"
		);
	}

	#[test]
	fn plain_output_reports_empty_results() {
		assert_eq!(format_response_plain(&SearchResponse::default()), "No results\n");
	}

	#[test]
	fn json_output_keeps_raw_hits() {
		let json = format_response_json(&response()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["hits"][0]["type"], "issue");
		assert_eq!(value["hits"][1]["id"], "c-9");
		assert_eq!(value["hits"][0]["body"], "Steps to reproduce...");
	}

	#[test]
	fn outcome_json_includes_selection() {
		let outcome = AppOutcome {
			accepted: true,
			request: SearchRequest::new("a/b", "crash"),
			selection: Some(ResultItem::new(ItemId::Number(4), ResultKind::PullRequest, "eve")),
		};
		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["selection"]["type"], "pr");
		assert_eq!(value["type"], Value::Null);
	}

	#[test]
	fn item_plain_output_ends_with_full_body() {
		let detail: ItemDetail = serde_json::from_str(
			r#"{"id":42,"title":"App crashes","state":"open","closed_at":null,"body":"line one\n    line two"}"#,
		)
		.expect("detail");
		assert_eq!(
			format_item_plain(&detail),
			"App crashes\nid: 42\nstate: open\n\nline one\n    line two\n"
		);
	}
}

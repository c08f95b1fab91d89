//! Wire types exchanged with the search backend.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A single search submission built from the form fields.
///
/// Both text fields are forwarded verbatim; the backend is responsible for
/// rejecting malformed repository identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
	/// Repository identifier, `owner/name` or a full URL.
	pub repo: String,
	/// Free-text description of the problem. May be empty.
	pub query: String,
	/// Restrict hits to one item type. `None` searches every type.
	pub kind: Option<ResultKind>,
}

impl SearchRequest {
	/// Build an unfiltered request.
	pub fn new(repo: impl Into<String>, query: impl Into<String>) -> Self {
		Self {
			repo: repo.into(),
			query: query.into(),
			kind: None,
		}
	}

	/// Attach (or clear) the type filter.
	#[must_use]
	pub fn with_kind(mut self, kind: Option<ResultKind>) -> Self {
		self.kind = kind;
		self
	}
}

/// Stable identifier of a hit.
///
/// The backend emits prefixed strings such as `issue:42`, while older indexes
/// use plain integers; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
	Number(i64),
	Text(String),
}

impl fmt::Display for ItemId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Number(value) => write!(f, "{value}"),
			Self::Text(value) => f.write_str(value),
		}
	}
}

/// Discriminates the kinds of items the backend indexes.
///
/// The set is open: unknown labels are kept in [`ResultKind::Other`] so a
/// newer backend never breaks decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResultKind {
	Issue,
	PullRequest,
	Comment,
	Other(String),
}

impl ResultKind {
	/// Kinds the backend accepts as a `type` filter, in cycling order.
	pub const FILTERS: [ResultKind; 3] = [Self::Issue, Self::PullRequest, Self::Comment];

	/// Interpret a wire label.
	#[must_use]
	pub fn from_label(label: &str) -> Self {
		match label {
			"issue" => Self::Issue,
			"pr" | "pull_request" | "pull-request" => Self::PullRequest,
			"comment" => Self::Comment,
			other => Self::Other(other.to_string()),
		}
	}

	/// Parse a user-supplied filter label, rejecting unknown kinds.
	#[must_use]
	pub fn parse_filter(label: &str) -> Option<Self> {
		match Self::from_label(label.trim()) {
			Self::Other(_) => None,
			kind => Some(kind),
		}
	}

	/// Canonical wire label.
	#[must_use]
	pub fn label(&self) -> &str {
		match self {
			Self::Issue => "issue",
			Self::PullRequest => "pr",
			Self::Comment => "comment",
			Self::Other(label) => label,
		}
	}

	/// The filter that follows `current` when cycling; `None` means "all".
	#[must_use]
	pub fn next_filter(current: Option<&ResultKind>) -> Option<ResultKind> {
		let next = match current {
			None => 0,
			Some(kind) => match Self::FILTERS.iter().position(|filter| filter == kind) {
				Some(index) => index + 1,
				None => return None,
			},
		};
		Self::FILTERS.get(next).cloned()
	}
}

impl fmt::Display for ResultKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl Serialize for ResultKind {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.label())
	}
}

impl<'de> Deserialize<'de> for ResultKind {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let label = String::deserialize(deserializer)?;
		Ok(Self::from_label(&label))
	}
}

/// One hit returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
	pub id: ItemId,
	#[serde(rename = "type")]
	pub kind: ResultKind,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub author: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub body: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub html_url: Option<String>,
	#[serde(
		default,
		deserialize_with = "null_as_empty",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub labels: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_at: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub issue_number: Option<u64>,
}

impl ResultItem {
	/// Minimal hit with only the mandatory fields populated.
	pub fn new(id: ItemId, kind: ResultKind, author: impl Into<String>) -> Self {
		Self {
			id,
			kind,
			author: Some(author.into()),
			title: None,
			body: None,
			html_url: None,
			labels: Vec::new(),
			created_at: None,
			issue_number: None,
		}
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	#[must_use]
	pub fn with_body(mut self, body: impl Into<String>) -> Self {
		self.body = Some(body.into());
		self
	}

	#[must_use]
	pub fn with_html_url(mut self, url: impl Into<String>) -> Self {
		self.html_url = Some(url.into());
		self
	}
}

/// Decoded body of `GET /search`.
///
/// Only `hits` matters to the client; a body without it is an empty result
/// set rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
	#[serde(default, deserialize_with = "null_as_empty")]
	pub hits: Vec<ResultItem>,
	/// Estimated number of matches known to the backend.
	#[serde(default)]
	pub total: Option<u64>,
	#[serde(default)]
	pub query: Option<String>,
	#[serde(default)]
	pub repo: Option<String>,
}

impl SearchResponse {
	pub fn from_hits(hits: Vec<ResultItem>) -> Self {
		Self {
			hits,
			..Self::default()
		}
	}
}

/// Ingest status of a repository as reported by `GET /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStatus {
	pub repo: String,
	#[serde(default)]
	pub last_ingested_at: Option<String>,
	#[serde(default)]
	pub issues: u64,
	#[serde(default)]
	pub comments: u64,
}

/// Acknowledgement returned by `POST /ingest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReceipt {
	pub status: String,
	pub repo: String,
}

/// Stored record returned by `GET /items/{id}`.
///
/// Columns differ between issues and comments, so every field the backend
/// sends is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemDetail(pub Map<String, Value>);

impl ItemDetail {
	/// Text value of `name`, if present and a string.
	#[must_use]
	pub fn text(&self, name: &str) -> Option<&str> {
		self.0.get(name).and_then(Value::as_str)
	}

	/// Full, untruncated body.
	#[must_use]
	pub fn body(&self) -> Option<&str> {
		self.text("body")
	}

	#[must_use]
	pub fn title(&self) -> Option<&str> {
		self.text("title")
	}

	/// Every field other than title and body, in key order.
	pub fn extra_fields(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0
			.iter()
			.filter(|(key, _)| !matches!(key.as_str(), "title" | "body"))
			.map(|(key, value)| (key.as_str(), value))
	}
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_numeric_and_prefixed_ids() {
		let body = r#"{"hits":[
			{"id":1,"type":"issue","author":"alice"},
			{"id":"comment:77","type":"comment","author":"bob"}
		]}"#;
		let response: SearchResponse = serde_json::from_str(body).expect("decode");
		assert_eq!(response.hits[0].id, ItemId::Number(1));
		assert_eq!(response.hits[1].id.to_string(), "comment:77");
	}

	#[test]
	fn missing_or_null_hits_decode_as_empty() {
		let missing: SearchResponse = serde_json::from_str("{}").expect("decode");
		assert!(missing.hits.is_empty());

		let null: SearchResponse = serde_json::from_str(r#"{"hits":null}"#).expect("decode");
		assert!(null.hits.is_empty());
	}

	#[test]
	fn unknown_fields_are_ignored() {
		let body = r#"{
			"query":"crash","repo":"a/b","total":3,"processingTimeMs":4,
			"hits":[{"id":5,"type":"pr","author":"carol","labels":["bug"],"_rankingScore":0.9}]
		}"#;
		let response: SearchResponse = serde_json::from_str(body).expect("decode");
		assert_eq!(response.total, Some(3));
		let hit = &response.hits[0];
		assert_eq!(hit.kind, ResultKind::PullRequest);
		assert_eq!(hit.labels, vec!["bug".to_string()]);
	}

	#[test]
	fn kind_keeps_unknown_labels() {
		assert_eq!(ResultKind::from_label("pull_request"), ResultKind::PullRequest);
		assert_eq!(ResultKind::from_label("discussion").label(), "discussion");
		assert_eq!(ResultKind::parse_filter("discussion"), None);
		assert_eq!(ResultKind::parse_filter(" comment "), Some(ResultKind::Comment));
	}

	#[test]
	fn filter_cycle_wraps_back_to_all() {
		let mut current = None;
		let mut seen = Vec::new();
		for _ in 0..4 {
			current = ResultKind::next_filter(current.as_ref());
			seen.push(current.clone());
		}
		assert_eq!(
			seen,
			vec![
				Some(ResultKind::Issue),
				Some(ResultKind::PullRequest),
				Some(ResultKind::Comment),
				None,
			]
		);
	}

	#[test]
	fn unknown_kind_cycles_back_to_all() {
		let other = ResultKind::Other("discussion".into());
		assert_eq!(ResultKind::next_filter(Some(&other)), None);
	}

	#[test]
	fn serialized_hit_omits_absent_fields() {
		let item = ResultItem::new(ItemId::Number(1), ResultKind::Issue, "alice").with_title("t");
		let value = serde_json::to_value(&item).expect("encode");
		assert_eq!(value["type"], "issue");
		assert!(value.get("body").is_none());
		assert!(value.get("labels").is_none());
	}
}

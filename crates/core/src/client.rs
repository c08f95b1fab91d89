use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::SearchError;
use crate::model::{IngestReceipt, ItemDetail, ItemId, RepoStatus, SearchRequest, SearchResponse};

/// Origin used when no configuration overrides it.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
/// Per-request timeout used when no configuration overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_USER_AGENT: &str = concat!("issue-search/", env!("CARGO_PKG_VERSION"));

/// Anything that can answer a [`SearchRequest`].
///
/// The HTTP client is the production implementation; tests substitute
/// in-memory backends to control ordering and failures.
pub trait SearchBackend: Send + Sync {
	fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}

/// Connection settings for [`HttpSearchClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
	/// Root origin for every request, e.g. `http://localhost:8000`.
	pub api_base: String,
	pub timeout: Duration,
	pub user_agent: String,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			api_base: DEFAULT_API_BASE.to_string(),
			timeout: DEFAULT_TIMEOUT,
			user_agent: DEFAULT_USER_AGENT.to_string(),
		}
	}
}

/// Blocking HTTP client for the search backend.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
	http: Client,
	api_base: String,
}

impl HttpSearchClient {
	/// Build a client for the configured origin.
	pub fn new(config: &ClientConfig) -> Result<Self, SearchError> {
		let http = Client::builder()
			.timeout(config.timeout)
			.user_agent(config.user_agent.clone())
			.build()
			.map_err(|err| SearchError::Client(err.to_string()))?;

		Ok(Self {
			http,
			api_base: config.api_base.trim_end_matches('/').to_string(),
		})
	}

	/// Origin this client talks to, without a trailing slash.
	#[must_use]
	pub fn api_base(&self) -> &str {
		&self.api_base
	}

	/// Fetch the ingest status of `repo`.
	pub fn status(&self, repo: &str) -> Result<RepoStatus, SearchError> {
		let url = format!("{}/status?repo={}", self.api_base, urlencoding::encode(repo));
		debug!("GET {url}");
		self.send(self.http.get(url))
	}

	/// Ask the backend to (re)ingest `repo`.
	pub fn ingest(&self, repo: &str) -> Result<IngestReceipt, SearchError> {
		let url = format!("{}/ingest", self.api_base);
		debug!("POST {url} repo={repo}");
		self.send(self.http.post(url).json(&json!({ "repo": repo })))
	}

	/// Fetch the full stored record of one hit, e.g. `issue:42`.
	pub fn item(&self, id: &ItemId) -> Result<ItemDetail, SearchError> {
		let url = item_url(&self.api_base, id);
		debug!("GET {url}");
		self.send(self.http.get(url))
	}

	fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, SearchError> {
		let response = builder
			.send()
			.map_err(|err| SearchError::Network(err.to_string()))?;
		let status = response.status();
		let body = response
			.bytes()
			.map_err(|err| SearchError::Network(err.to_string()))?;

		if !status.is_success() {
			return Err(SearchError::Status {
				status: status.as_u16(),
				detail: error_detail(&body),
			});
		}

		serde_json::from_slice(&body).map_err(|err| SearchError::Decode(err.to_string()))
	}
}

impl SearchBackend for HttpSearchClient {
	fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
		let url = search_url(&self.api_base, request);
		debug!("GET {url}");
		self.send(self.http.get(url))
	}
}

/// Canonical `GET /search` URL for `request` against `api_base`.
///
/// `repo` and `q` are always present, even when empty; `type` is only added
/// when a filter is set.
#[must_use]
pub fn search_url(api_base: &str, request: &SearchRequest) -> String {
	let mut url = format!(
		"{}/search?repo={}&q={}",
		api_base.trim_end_matches('/'),
		urlencoding::encode(&request.repo),
		urlencoding::encode(&request.query),
	);
	if let Some(kind) = &request.kind {
		url.push_str("&type=");
		url.push_str(&urlencoding::encode(kind.label()));
	}
	url
}

/// `GET /items/{id}` URL for `id` against `api_base`.
#[must_use]
pub fn item_url(api_base: &str, id: &ItemId) -> String {
	format!(
		"{}/items/{}",
		api_base.trim_end_matches('/'),
		urlencoding::encode(&id.to_string())
	)
}

/// Pull a human readable message out of an error body.
fn error_detail(body: &[u8]) -> Option<String> {
	match serde_json::from_slice::<Value>(body) {
		Ok(Value::Object(map)) => match map.get("detail") {
			Some(Value::String(detail)) => Some(detail.clone()),
			Some(other) => Some(other.to_string()),
			None => None,
		},
		Ok(_) => None,
		Err(_) => {
			let text = String::from_utf8_lossy(body);
			let text = text.trim();
			(!text.is_empty()).then(|| text.chars().take(200).collect())
		}
	}
}

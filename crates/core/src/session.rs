//! Search lifecycle state machine.
//!
//! [`SearchSession`] is the single owner of the user-visible search state. It
//! is mutated only through [`SearchSession::submit`] and
//! [`SearchSession::resolve`], which keeps the generation-token rule in one
//! place: only the response to the most recently submitted request may touch
//! the results.

use crate::error::SearchError;
use crate::model::{ResultItem, SearchRequest, SearchResponse};

/// Lifecycle phase of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchPhase {
	#[default]
	Idle,
	Searching,
	/// The latest request failed; the message is meant for display.
	Failed(String),
}

/// A request tagged with the generation token it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
	pub id: u64,
	pub request: SearchRequest,
}

/// What [`SearchSession::resolve`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// Results were replaced.
	Applied,
	/// The latest request failed; results were left untouched.
	Failed,
	/// The outcome belonged to a superseded request and was discarded.
	Stale,
}

#[derive(Debug, Default)]
pub struct SearchSession {
	repo: String,
	query: String,
	results: Vec<ResultItem>,
	phase: SearchPhase,
	latest: u64,
	total: Option<u64>,
	completed: bool,
}

impl SearchSession {
	pub fn new() -> Self {
		Self::default()
	}

	/// Start a new search: issue the next generation token and enter
	/// [`SearchPhase::Searching`].
	pub fn submit(&mut self, request: SearchRequest) -> Submission {
		self.latest = self.latest.saturating_add(1);
		self.repo.clone_from(&request.repo);
		self.query.clone_from(&request.query);
		self.phase = SearchPhase::Searching;
		Submission {
			id: self.latest,
			request,
		}
	}

	/// Reconcile the outcome of request `id` into the session.
	pub fn resolve(
		&mut self,
		id: u64,
		outcome: Result<SearchResponse, SearchError>,
	) -> Resolution {
		if id != self.latest || !self.is_loading() {
			return Resolution::Stale;
		}

		match outcome {
			Ok(response) => {
				self.results = response.hits;
				self.total = response.total;
				self.completed = true;
				self.phase = SearchPhase::Idle;
				Resolution::Applied
			}
			Err(error) => {
				self.phase = SearchPhase::Failed(format!("search failed: {error}"));
				Resolution::Failed
			}
		}
	}

	/// Hits of the most recently completed request, in backend order.
	#[must_use]
	pub fn results(&self) -> &[ResultItem] {
		&self.results
	}

	#[must_use]
	pub fn phase(&self) -> &SearchPhase {
		&self.phase
	}

	/// True between a submission and the resolution of that same request.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.phase == SearchPhase::Searching
	}

	/// Message of the last failure, if the latest request failed.
	#[must_use]
	pub fn error(&self) -> Option<&str> {
		match &self.phase {
			SearchPhase::Failed(message) => Some(message),
			_ => None,
		}
	}

	/// Generation token of the most recent submission; zero before any.
	#[must_use]
	pub fn latest_id(&self) -> u64 {
		self.latest
	}

	/// Estimated total reported with the displayed results.
	#[must_use]
	pub fn total(&self) -> Option<u64> {
		self.total
	}

	/// Whether any request has completed successfully.
	#[must_use]
	pub fn has_completed(&self) -> bool {
		self.completed
	}

	/// Repository of the last submission.
	#[must_use]
	pub fn repo(&self) -> &str {
		&self.repo
	}

	/// Query of the last submission.
	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{ItemId, ResultKind};

	fn hits(ids: &[i64]) -> SearchResponse {
		SearchResponse::from_hits(
			ids.iter()
				.map(|id| ResultItem::new(ItemId::Number(*id), ResultKind::Issue, "alice"))
				.collect(),
		)
	}

	fn ids(session: &SearchSession) -> Vec<ItemId> {
		session.results().iter().map(|hit| hit.id.clone()).collect()
	}

	#[test]
	fn starts_idle_and_empty() {
		let session = SearchSession::new();
		assert_eq!(session.phase(), &SearchPhase::Idle);
		assert!(session.results().is_empty());
		assert!(!session.is_loading());
		assert!(!session.has_completed());
	}

	#[test]
	fn submit_enters_searching_and_mirrors_fields() {
		let mut session = SearchSession::new();
		let submission = session.submit(SearchRequest::new("octocat/hello-world", ""));
		assert_eq!(submission.id, 1);
		assert_eq!(submission.request.query, "");
		assert!(session.is_loading());
		assert_eq!(session.repo(), "octocat/hello-world");
		assert_eq!(session.query(), "");
	}

	#[test]
	fn success_replaces_results_and_clears_loading() {
		let mut session = SearchSession::new();
		let first = session.submit(SearchRequest::new("a/b", "x"));
		assert_eq!(session.resolve(first.id, Ok(hits(&[1, 2]))), Resolution::Applied);
		assert!(!session.is_loading());

		let second = session.submit(SearchRequest::new("a/b", "y"));
		assert_eq!(session.resolve(second.id, Ok(hits(&[3]))), Resolution::Applied);
		assert_eq!(ids(&session), vec![ItemId::Number(3)]);
	}

	#[test]
	fn late_response_of_superseded_request_is_discarded() {
		let mut session = SearchSession::new();
		let a = session.submit(SearchRequest::new("a/b", "first"));
		let b = session.submit(SearchRequest::new("a/b", "second"));

		assert_eq!(session.resolve(b.id, Ok(hits(&[20]))), Resolution::Applied);
		assert_eq!(session.resolve(a.id, Ok(hits(&[10]))), Resolution::Stale);

		assert_eq!(ids(&session), vec![ItemId::Number(20)]);
		assert!(!session.is_loading());
	}

	#[test]
	fn superseded_response_arriving_first_does_not_end_loading() {
		let mut session = SearchSession::new();
		let a = session.submit(SearchRequest::new("a/b", "first"));
		let b = session.submit(SearchRequest::new("a/b", "second"));

		assert_eq!(session.resolve(a.id, Ok(hits(&[10]))), Resolution::Stale);
		assert!(session.is_loading());
		assert!(session.results().is_empty());

		session.resolve(b.id, Ok(hits(&[20])));
		assert_eq!(ids(&session), vec![ItemId::Number(20)]);
	}

	#[test]
	fn failure_keeps_previous_results_visible() {
		let mut session = SearchSession::new();
		let ok = session.submit(SearchRequest::new("a/b", "x"));
		session.resolve(ok.id, Ok(hits(&[1])));

		let failing = session.submit(SearchRequest::new("a/b", "y"));
		let outcome = Err(SearchError::Network("connection refused".into()));
		assert_eq!(session.resolve(failing.id, outcome), Resolution::Failed);

		assert!(!session.is_loading());
		assert_eq!(ids(&session), vec![ItemId::Number(1)]);
		assert_eq!(
			session.error(),
			Some("search failed: network error: connection refused")
		);
	}

	#[test]
	fn next_submission_clears_failure() {
		let mut session = SearchSession::new();
		let failing = session.submit(SearchRequest::new("a/b", "x"));
		session.resolve(failing.id, Err(SearchError::Decode("eof".into())));
		assert!(session.error().is_some());

		session.submit(SearchRequest::new("a/b", "x"));
		assert_eq!(session.error(), None);
		assert!(session.is_loading());
	}

	#[test]
	fn duplicate_resolution_is_ignored() {
		let mut session = SearchSession::new();
		let submission = session.submit(SearchRequest::new("a/b", "x"));
		session.resolve(submission.id, Ok(hits(&[1])));
		assert_eq!(
			session.resolve(submission.id, Ok(hits(&[2]))),
			Resolution::Stale
		);
		assert_eq!(ids(&session), vec![ItemId::Number(1)]);
	}

	#[test]
	fn missing_hits_yield_empty_results() {
		let mut session = SearchSession::new();
		let submission = session.submit(SearchRequest::new("a/b", "x"));
		let response: SearchResponse = serde_json::from_str("{}").expect("decode");
		assert_eq!(session.resolve(submission.id, Ok(response)), Resolution::Applied);
		assert!(session.results().is_empty());
		assert!(session.has_completed());
	}
}

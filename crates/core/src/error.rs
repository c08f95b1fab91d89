use thiserror::Error;

/// Failures surfaced while talking to the search backend.
///
/// Every variant is recoverable from the UI's point of view: the session keeps
/// the previously displayed results and reports the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
	/// The request never produced a response (refused, DNS, timeout).
	#[error("network error: {0}")]
	Network(String),
	/// The backend answered with a non-success status code.
	#[error("backend returned HTTP {status}{}", detail_suffix(.detail))]
	Status {
		/// HTTP status code.
		status: u16,
		/// Message extracted from the response body, if any.
		detail: Option<String>,
	},
	/// The body was not JSON or did not have the expected shape.
	#[error("malformed response: {0}")]
	Decode(String),
	/// The HTTP client could not be built.
	#[error("failed to build HTTP client: {0}")]
	Client(String),
}

impl SearchError {
	/// Whether the failure happened before any response arrived.
	#[must_use]
	pub fn is_network(&self) -> bool {
		matches!(self, Self::Network(_))
	}
}

fn detail_suffix(detail: &Option<String>) -> String {
	match detail {
		Some(detail) if !detail.is_empty() => format!(": {detail}"),
		_ => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_error_includes_backend_detail() {
		let error = SearchError::Status {
			status: 404,
			detail: Some("Issue not found".into()),
		};
		assert_eq!(error.to_string(), "backend returned HTTP 404: Issue not found");
	}

	#[test]
	fn status_error_without_detail_is_terse() {
		let error = SearchError::Status {
			status: 502,
			detail: None,
		};
		assert_eq!(error.to_string(), "backend returned HTTP 502");
		assert!(!error.is_network());
	}
}

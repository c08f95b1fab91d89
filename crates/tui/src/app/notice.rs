use std::time::{Duration, Instant};

const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Short-lived message shown in the status line.
#[derive(Debug, Clone)]
pub(crate) struct Notice {
	pub message: String,
	pub is_error: bool,
	expires_at: Instant,
}

impl Notice {
	pub fn info(message: impl Into<String>) -> Self {
		Self::new(message.into(), false)
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self::new(message.into(), true)
	}

	fn new(message: String, is_error: bool) -> Self {
		Self {
			message,
			is_error,
			expires_at: Instant::now() + NOTICE_TTL,
		}
	}

	pub fn is_expired(&self, now: Instant) -> bool {
		now >= self.expires_at
	}
}

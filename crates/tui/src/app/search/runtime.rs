use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use issue_search_core::runtime::{self, SearchCommand, SearchResult};
use issue_search_core::{SearchBackend, Submission};

/// UI-side handle on the background search worker.
pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResult>,
	latest_query_id: Arc<AtomicU64>,
}

impl SearchRuntime {
	pub(crate) fn spawn(backend: Arc<dyn SearchBackend>) -> Self {
		let (tx, rx, latest_query_id) = runtime::spawn(backend);
		Self {
			tx,
			rx,
			latest_query_id,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}

	/// Publish the submission's token as the latest one, then hand the request
	/// to the worker.
	pub(crate) fn dispatch(&self, submission: Submission) {
		let Submission { id, request } = submission;
		self.latest_query_id.store(id, Ordering::Release);
		let _ = self.tx.send(SearchCommand::Query { id, request });
	}

	pub(crate) fn try_recv(&self) -> Result<SearchResult, TryRecvError> {
		self.rx.try_recv()
	}
}

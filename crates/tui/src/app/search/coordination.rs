use std::sync::mpsc::TryRecvError;

use issue_search_core::Resolution;
use issue_search_core::runtime::SearchResult;
use log::{debug, info};

use crate::app::state::App;

impl<'a> App<'a> {
	/// Submit the form: snapshot the fields, enter the searching phase and
	/// dispatch the request. The fields are left as they are.
	pub(crate) fn submit(&mut self) {
		let request = self.form.request();
		info!(
			"submitting search repo={:?} query={:?} type={}",
			request.repo,
			request.query,
			self.form.kind_label()
		);
		let submission = self.session.submit(request);
		self.notice = None;
		self.search.dispatch(submission);
	}

	/// Drain any search results waiting on the receiver channel.
	pub(crate) fn pump_search_results(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(result) => self.handle_search_result(result),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Reconcile a settled request into the session; superseded responses are
	/// dropped there.
	fn handle_search_result(&mut self, result: SearchResult) {
		let SearchResult { id, outcome } = result;
		match self.session.resolve(id, outcome) {
			Resolution::Applied => {
				debug!("applied {} hits for query {id}", self.session.results().len());
				self.results.reset(self.session.results().len());
			}
			Resolution::Failed => {
				debug!("query {id} failed, keeping previous results");
			}
			Resolution::Stale => {
				debug!("discarded stale result for query {id}");
			}
		}
	}
}

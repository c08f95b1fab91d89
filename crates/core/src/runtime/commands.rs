use crate::error::SearchError;
use crate::model::{SearchRequest, SearchResponse};

/// Commands understood by the background search worker.
#[derive(Debug)]
pub enum SearchCommand {
	/// Dispatch a search request.
	Query {
		/// Generation token that lets the UI correlate the response.
		id: u64,
		request: SearchRequest,
	},
	/// Stop the worker thread. Requests already on the wire run to completion.
	Shutdown,
}

/// Settled outcome of one dispatched query.
#[derive(Debug)]
pub struct SearchResult {
	pub id: u64,
	pub outcome: Result<SearchResponse, SearchError>,
}

//! Core of `issue-search`: the request model, the HTTP dispatcher that talks to
//! the search backend, the background search worker and the session state
//! machine that reconciles responses into UI state.
//!
//! Front-ends (the terminal UI and the headless workflow) only build
//! [`SearchRequest`] values, hand them to a [`SearchBackend`] or the
//! [`runtime`] worker, and read the resulting [`SearchSession`].

mod client;
pub mod display;
mod error;
mod model;
pub mod runtime;
mod session;

pub use client::{
	ClientConfig, DEFAULT_API_BASE, DEFAULT_TIMEOUT, HttpSearchClient, SearchBackend, item_url,
	search_url,
};
pub use error::SearchError;
pub use model::{
	IngestReceipt, ItemDetail, ItemId, RepoStatus, ResultItem, ResultKind, SearchRequest, SearchResponse,
};
pub use session::{Resolution, SearchPhase, SearchSession, Submission};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{debug, warn};

use super::commands::{SearchCommand, SearchResult};
use crate::client::SearchBackend;
use crate::model::SearchRequest;

/// Launch the search worker and return its command channel, result channel and
/// the shared "latest issued id" marker.
///
/// Callers store the id of each new query in the marker before sending it, so
/// queries that are already superseded when their turn comes are dropped
/// without touching the network.
pub fn spawn(
	backend: Arc<dyn SearchBackend>,
) -> (
	Sender<SearchCommand>,
	Receiver<SearchResult>,
	Arc<AtomicU64>,
) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(&backend, command_rx, result_tx, thread_latest));

	(command_tx, result_rx, latest_query_id)
}

fn worker_loop(
	backend: &Arc<dyn SearchBackend>,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResult>,
	latest_query_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(backend, &result_tx, &latest_query_id, command) {
			break;
		}
	}
}

fn handle_command(
	backend: &Arc<dyn SearchBackend>,
	result_tx: &Sender<SearchResult>,
	latest_query_id: &Arc<AtomicU64>,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { id, request } => {
			dispatch(backend, result_tx, latest_query_id, id, request);
			true
		}
		SearchCommand::Shutdown => false,
	}
}

/// Run one query on its own thread so a slow request never delays a newer one.
fn dispatch(
	backend: &Arc<dyn SearchBackend>,
	result_tx: &Sender<SearchResult>,
	latest_query_id: &Arc<AtomicU64>,
	id: u64,
	request: SearchRequest,
) {
	let backend = Arc::clone(backend);
	let result_tx = result_tx.clone();
	let latest_query_id = Arc::clone(latest_query_id);

	thread::spawn(move || {
		if latest_query_id.load(Ordering::Acquire) > id {
			debug!("dropping query {id} superseded before dispatch");
			return;
		}

		let outcome = backend.search(&request);
		if let Err(err) = &outcome {
			warn!("query {id} for {:?} failed: {err}", request.repo);
		}
		let _ = result_tx.send(SearchResult { id, outcome });
	});
}

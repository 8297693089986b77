use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use docsift_search_api::{IndexNames, IndexQuery, SearchClient, normalize};
use tracing::{debug, trace, warn};

use super::commands::{SearchCommand, SearchResult};

/// Launches the background search worker thread and returns communication channels.
///
/// Each query runs on its own short-lived thread so a slow call never delays
/// a newer one. Results for generations older than the latest issued one are
/// dropped before they reach the channel.
pub(crate) fn spawn(
	client: Arc<dyn SearchClient>,
	indices: IndexNames,
) -> (Sender<SearchCommand>, Receiver<SearchResult>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_generation = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_generation);

	thread::spawn(move || worker_loop(&client, &indices, command_rx, result_tx, thread_latest));

	(command_tx, result_rx, latest_generation)
}

fn worker_loop(
	client: &Arc<dyn SearchClient>,
	indices: &IndexNames,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResult>,
	latest_generation: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(client, indices, &result_tx, &latest_generation, command) {
			break;
		}
	}
	debug!("search worker stopped");
}

fn handle_command(
	client: &Arc<dyn SearchClient>,
	indices: &IndexNames,
	result_tx: &Sender<SearchResult>,
	latest_generation: &Arc<AtomicU64>,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { generation, queries } => {
			let client = Arc::clone(client);
			let indices = indices.clone();
			let result_tx = result_tx.clone();
			let latest = Arc::clone(latest_generation);
			thread::spawn(move || {
				run_query(client.as_ref(), &indices, &result_tx, &latest, generation, &queries);
			});
			true
		}
		SearchCommand::Shutdown => false,
	}
}

fn run_query(
	client: &dyn SearchClient,
	indices: &IndexNames,
	result_tx: &Sender<SearchResult>,
	latest_generation: &AtomicU64,
	generation: u64,
	queries: &[IndexQuery],
) {
	debug!(generation, sub_queries = queries.len(), "dispatching search");
	let outcome = client.multiple_queries(queries).map(|responses| {
		let normalized = normalize(responses, indices);
		if normalized.skipped_hits > 0 {
			warn!(generation, skipped = normalized.skipped_hits, "dropped malformed hits");
		}
		normalized
	});

	if generation < latest_generation.load(Ordering::Acquire) {
		trace!(generation, "discarding superseded search result");
		return;
	}
	let _ = result_tx.send(SearchResult { generation, outcome });
}

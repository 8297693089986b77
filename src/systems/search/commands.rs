use docsift_search_api::{IndexQuery, Normalized, SearchError};

/// Commands understood by the background search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
	/// Run one batched call for a request cycle.
	Query {
		/// Cycle identifier that lets the UI discard superseded responses.
		generation: u64,
		/// Sub-queries built from the query state of that cycle.
		queries: Vec<IndexQuery>,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Outcome of one request cycle, tagged with its generation.
#[derive(Debug)]
pub(crate) struct SearchResult {
	pub(crate) generation: u64,
	pub(crate) outcome: Result<Normalized, SearchError>,
}

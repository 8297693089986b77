use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use docsift_search_api::{IndexQuery, ResultBag, SearchError};
use tracing::{debug, warn};

use crate::systems::search::{SearchCommand, SearchResult};

/// Delay before a pending cycle clears the displayed results.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(500);

/// Results committed by one resolved cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResultSnapshot {
	pub(crate) generation: u64,
	pub(crate) bag: ResultBag,
	pub(crate) total_pages: u32,
}

/// What the result area currently shows.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResultView {
	/// No cycle has resolved yet and the loading delay has not elapsed.
	Idle,
	/// The pending cycle outlived the loading delay.
	Loading,
	Ready(Arc<ResultSnapshot>),
	Failed(SearchError),
}

struct PendingCycle {
	generation: u64,
	issued_at: Instant,
}

pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResult>,
	latest_generation: Arc<AtomicU64>,
	next_generation: u64,
	pending: Option<PendingCycle>,
	last_queries: Vec<IndexQuery>,
	loading_delay: Duration,
	view: ResultView,
	/// Page count of the last successful cycle; survives loading and failure.
	total_pages: u32,
}

impl SearchRuntime {
	pub(crate) fn new(
		tx: Sender<SearchCommand>,
		rx: Receiver<SearchResult>,
		latest_generation: Arc<AtomicU64>,
	) -> Self {
		Self {
			tx,
			rx,
			latest_generation,
			next_generation: 0,
			pending: None,
			last_queries: Vec::new(),
			loading_delay: DEFAULT_LOADING_DELAY,
			view: ResultView::Idle,
			total_pages: 1,
		}
	}

	pub(crate) fn set_loading_delay(&mut self, delay: Duration) {
		self.loading_delay = delay;
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}

	/// Begin a new request cycle and return its generation.
	pub(crate) fn issue(&mut self, queries: Vec<IndexQuery>) -> u64 {
		self.issue_at(queries, Instant::now())
	}

	pub(crate) fn issue_at(&mut self, queries: Vec<IndexQuery>, now: Instant) -> u64 {
		self.next_generation = self.next_generation.saturating_add(1);
		let generation = self.next_generation;
		self.pending = Some(PendingCycle {
			generation,
			issued_at: now,
		});
		self.latest_generation.store(generation, AtomicOrdering::Release);
		self.last_queries.clone_from(&queries);
		debug!(generation, sub_queries = queries.len(), "issuing search cycle");
		if self.tx.send(SearchCommand::Query { generation, queries }).is_err() {
			warn!(generation, "search worker is gone");
		}
		generation
	}

	/// Re-issue the last cycle's queries as a new generation.
	pub(crate) fn retry(&mut self) -> Option<u64> {
		if self.last_queries.is_empty() {
			return None;
		}
		let queries = self.last_queries.clone();
		Some(self.issue(queries))
	}

	/// Advance the loading timer. Returns `true` when the view changed.
	pub(crate) fn tick(&mut self, now: Instant) -> bool {
		let Some(pending) = &self.pending else {
			return false;
		};
		if matches!(self.view, ResultView::Loading)
			|| now.saturating_duration_since(pending.issued_at) < self.loading_delay
		{
			return false;
		}
		self.view = ResultView::Loading;
		true
	}

	pub(crate) fn matches_latest(&self, generation: u64) -> bool {
		self.pending
			.as_ref()
			.is_some_and(|pending| pending.generation == generation)
	}

	/// Commit a result if it belongs to the latest cycle. Returns `true` when applied.
	pub(crate) fn apply(&mut self, result: SearchResult) -> bool {
		if !self.matches_latest(result.generation) {
			debug!(generation = result.generation, "dropping stale search result");
			return false;
		}
		self.pending = None;
		self.view = match result.outcome {
			Ok(normalized) => {
				self.total_pages = normalized.total_pages.max(1);
				ResultView::Ready(Arc::new(ResultSnapshot {
					generation: result.generation,
					bag: normalized.bag,
					total_pages: normalized.total_pages,
				}))
			}
			Err(error) => {
				warn!(generation = result.generation, %error, "search cycle failed");
				ResultView::Failed(error)
			}
		};
		true
	}

	/// Drain the result channel, applying whatever is current.
	/// Returns `true` when the view changed.
	pub(crate) fn pump(&mut self) -> bool {
		let mut changed = false;
		loop {
			match self.rx.try_recv() {
				Ok(result) => changed |= self.apply(result),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
		changed
	}

	pub(crate) fn view(&self) -> &ResultView {
		&self.view
	}

	pub(crate) fn has_issued(&self) -> bool {
		self.next_generation > 0
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.pending.is_some()
	}

	pub(crate) fn is_failed(&self) -> bool {
		matches!(self.view, ResultView::Failed(_))
	}

	/// Committed snapshot, if the last resolved cycle succeeded and nothing cleared it.
	pub(crate) fn snapshot(&self) -> Option<&Arc<ResultSnapshot>> {
		match &self.view {
			ResultView::Ready(snapshot) => Some(snapshot),
			_ => None,
		}
	}

	/// Page count of the last successful cycle, 1 before any succeeded.
	pub(crate) fn total_pages(&self) -> u32 {
		self.total_pages
	}
}

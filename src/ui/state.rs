//! Core state container for the search overlay.
//!
//! [`App`] bundles the query state, the committed result view, the overlay
//! lifecycle and the background document so the action, render and runtime
//! modules can operate on one value.

use std::sync::Arc;
use std::time::Instant;

use docsift_search_api::{
	Category, ClickEvent, ClickSink, IndexNames, LinkBuilder, NoopClickSink, QueryState,
	SearchClient, build_queries,
};
use docsift_tui::{OverlayLabels, QueryInput, Theme};
use ratatui::widgets::{ListState, ScrollbarState};
use throbber_widgets_tui::ThrobberState;
use tracing::debug;

use super::document::DocumentState;
use super::lifecycle::Overlay;
use super::outcome::{Activation, SearchOutcome};
use crate::systems::search;

mod search_runtime;

pub use search_runtime::DEFAULT_LOADING_DELAY;
pub(crate) use search_runtime::ResultView;
use search_runtime::SearchRuntime;

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

/// Aggregate state of the search overlay and its background document.
pub struct App<'a> {
	/// Query text editor shown in the prompt row.
	pub input: QueryInput<'a>,
	pub(crate) query: QueryState,
	pub(crate) indices: IndexNames,
	pub(crate) links: LinkBuilder,
	pub theme: Theme,
	pub(crate) labels: OverlayLabels,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) list_state: ListState,
	pub(crate) scrollbar_state: ScrollbarState,
	/// Selected hit, counted across all visible sections.
	pub(crate) selected: Option<usize>,
	pub(crate) overlay: Overlay,
	pub(crate) document: DocumentState,
	pub(crate) search: SearchRuntime,
	pub(crate) click_sink: Arc<dyn ClickSink>,
	pub(crate) activated: Option<Activation>,
}

impl<'a> App<'a> {
	/// Construct an [`App`] whose searches go through `client`.
	pub fn new(client: Arc<dyn SearchClient>, indices: IndexNames) -> Self {
		let (search_tx, search_rx, latest_generation) = search::spawn(client, indices.clone());
		let search = SearchRuntime::new(search_tx, search_rx, latest_generation);
		let labels = OverlayLabels::default();
		let mut input = QueryInput::new("").with_placeholder(labels.placeholder.clone());
		input.set_focused(false);

		Self {
			input,
			query: QueryState::new(),
			indices,
			links: LinkBuilder::default(),
			theme: Theme::default(),
			labels,
			throbber_state: ThrobberState::default(),
			list_state: ListState::default(),
			scrollbar_state: ScrollbarState::default(),
			selected: None,
			overlay: Overlay::default(),
			document: DocumentState::default(),
			search,
			click_sink: Arc::new(NoopClickSink),
			activated: None,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub(crate) fn set_labels(&mut self, labels: OverlayLabels) {
		self.input = QueryInput::new(self.query.text()).with_placeholder(labels.placeholder.clone());
		self.input.set_focused(self.overlay.is_open());
		self.labels = labels;
	}

	/// Replace the query state, e.g. with values from the command line.
	pub(crate) fn set_query(&mut self, query: QueryState) {
		self.input.replace(query.text());
		self.query = query;
	}

	pub(crate) fn set_loading_delay(&mut self, delay: std::time::Duration) {
		self.search.set_loading_delay(delay);
	}

	#[must_use]
	pub fn query(&self) -> &QueryState {
		&self.query
	}

	#[must_use]
	pub fn category(&self) -> Category {
		self.query.category()
	}

	/// Open the overlay, issuing the first search if none ran yet.
	pub(crate) fn open_overlay(&mut self) -> bool {
		if !self.overlay.open() {
			return false;
		}
		self.input.set_focused(true);
		if !self.search.has_issued() {
			self.request_search();
		}
		true
	}

	pub(crate) fn close_overlay(&mut self) -> bool {
		if !self.overlay.close() {
			return false;
		}
		self.input.set_focused(false);
		true
	}

	/// Start a request cycle for the current query state.
	pub(crate) fn request_search(&mut self) {
		let queries = build_queries(&self.query, &self.indices);
		self.search.issue(queries);
	}

	pub(crate) fn retry_search(&mut self) -> bool {
		self.search.retry().is_some()
	}

	/// Drain finished cycles and advance the loading timer.
	pub(crate) fn pump_search_results(&mut self) {
		if self.search.pump() {
			self.reset_selection();
		}
		if self.search.tick(Instant::now()) {
			self.reset_selection();
		}
	}

	fn reset_selection(&mut self) {
		let has_hits = self
			.search
			.snapshot()
			.is_some_and(|snapshot| !snapshot.bag.is_empty());
		self.selected = has_hits.then_some(0);
		*self.list_state.offset_mut() = 0;
	}

	/// Number of hits in the committed view.
	pub(crate) fn hit_count(&self) -> usize {
		self.search
			.snapshot()
			.map_or(0, |snapshot| snapshot.bag.total_len())
	}

	/// Open the selected hit: record the click, show it in the document and close the overlay.
	pub(crate) fn activate_selection(&mut self) -> bool {
		let Some(snapshot) = self.search.snapshot().cloned() else {
			return false;
		};
		let Some((section, row)) = self.selected.and_then(|flat| snapshot.bag.locate(flat)) else {
			return false;
		};
		let Some(hit) = snapshot.bag.hit(section, row) else {
			return false;
		};

		let activation = Activation::from_hit(section, hit, &self.links);
		if let Some(event) = ClickEvent::for_hit(&snapshot.bag, &self.indices, section, row) {
			self.click_sink.record(event);
		}
		debug!(href = %activation.href, "activated result");
		self.document.show(&activation);
		self.activated = Some(activation);
		self.close_overlay();
		true
	}

	pub(crate) fn outcome(&self) -> SearchOutcome {
		SearchOutcome {
			query: self.query.text().to_string(),
			category: self.query.category(),
			activation: self.activated.clone(),
		}
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use std::sync::Mutex;
	use std::thread;
	use std::time::Duration;

	use docsift_search_api::{IndexQuery, RawIndexResponse, SearchError};
	use serde_json::json;

	use super::*;

	/// Answers every batch with one hit per requested index.
	#[derive(Default)]
	pub(crate) struct FixtureClient {
		pub(crate) batches: Mutex<Vec<Vec<IndexQuery>>>,
	}

	impl SearchClient for FixtureClient {
		fn multiple_queries(
			&self,
			queries: &[IndexQuery],
		) -> Result<Vec<RawIndexResponse>, SearchError> {
			self.batches.lock().expect("batches lock").push(queries.to_vec());
			Ok(queries
				.iter()
				.map(|query| RawIndexResponse {
					index: query.index_name.clone(),
					hits: vec![fixture_hit(&query.index_name)],
					page: query.params.page,
					hits_per_page: query.params.hits_per_page,
					nb_pages: Some(3),
					query_id: Some(format!("{}-qid", query.index_name)),
				})
				.collect())
		}
	}

	fn fixture_hit(index: &str) -> serde_json::Value {
		match index {
			"manual" => json!({
				"objectID": "m1",
				"docPath": "getting_started/installation",
				"hierarchy": {"lvl0": "Getting Started", "lvl1": "Installation"},
				"anchor": "download",
				"content": "Install the runtime",
			}),
			"doc_nodes" => json!({
				"objectID": "s1",
				"name": "serve",
				"source": "deno",
				"kind": "function",
				"version": "1.40.0",
				"location": {"filename": "ext/http/lib.ts", "line": 1, "col": 0},
			}),
			_ => json!({"objectID": "x1", "name": "oak", "description": "Middleware framework"}),
		}
	}

	/// Records every click it receives.
	#[derive(Default)]
	pub(crate) struct RecordingSink {
		pub(crate) events: Mutex<Vec<ClickEvent>>,
	}

	impl ClickSink for RecordingSink {
		fn record(&self, event: ClickEvent) {
			self.events.lock().expect("events lock").push(event);
		}
	}

	pub(crate) fn fixture_app() -> (App<'static>, Arc<FixtureClient>) {
		let client = Arc::new(FixtureClient::default());
		let app = App::new(client.clone(), IndexNames::default());
		(app, client)
	}

	pub(crate) fn wait_for_results(app: &mut App) {
		let deadline = Instant::now() + Duration::from_secs(2);
		while app.search.is_in_flight() && Instant::now() < deadline {
			thread::sleep(Duration::from_millis(10));
			app.pump_search_results();
		}
		app.pump_search_results();
	}

	#[test]
	fn opening_issues_first_search_once() {
		let (mut app, client) = fixture_app();
		assert!(app.open_overlay());
		wait_for_results(&mut app);
		assert_eq!(app.hit_count(), 3);
		assert_eq!(app.selected, Some(0));

		app.close_overlay();
		app.open_overlay();
		wait_for_results(&mut app);
		assert_eq!(client.batches.lock().expect("batches lock").len(), 1);
	}

	#[test]
	fn activation_records_click_and_closes_overlay() {
		let (mut app, _client) = fixture_app();
		let sink = Arc::new(RecordingSink::default());
		app.click_sink = sink.clone();
		app.open_overlay();
		wait_for_results(&mut app);

		app.selected = Some(1);
		assert!(app.activate_selection());
		assert!(!app.overlay.is_open());

		let activation = app.outcome().activation.expect("activation");
		assert_eq!(activation.title, "serve");
		assert_eq!(activation.href, "https://deno.land/api@1.40.0?s=serve");
		assert_eq!(app.document.title, "serve");

		let events = sink.events.lock().expect("events lock");
		assert_eq!(events.len(), 1);
		assert_eq!(events[0].index, "doc_nodes");
		assert_eq!(events[0].query_id.as_deref(), Some("doc_nodes-qid"));
		assert_eq!(events[0].position, Some(1));
	}

	#[test]
	fn activation_without_results_is_ignored() {
		let (mut app, _client) = fixture_app();
		assert!(!app.activate_selection());
		assert!(app.outcome().activation.is_none());
	}
}

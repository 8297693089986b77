use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use docsift_search_api::{ClickSink, IndexNames, LinkBuilder, NoopClickSink, QueryState, SearchClient};
use docsift_tui::style::by_name;
use docsift_tui::{OverlayLabels, Theme};

use super::App;
use super::outcome::SearchOutcome;
use super::state::DEFAULT_LOADING_DELAY;

/// Builder for the interactive search overlay.
///
/// Collects the client, analytics sink, index names and presentation options
/// before constructing an [`App`] and running its event loop.
pub struct SearchOverlay {
	client: Arc<dyn SearchClient>,
	click_sink: Arc<dyn ClickSink>,
	indices: IndexNames,
	links: LinkBuilder,
	labels: OverlayLabels,
	theme: Option<Theme>,
	query: QueryState,
	loading_delay: Duration,
	start_open: bool,
}

impl SearchOverlay {
	/// Create an overlay that searches through `client`.
	pub fn new(client: Arc<dyn SearchClient>) -> Self {
		Self {
			client,
			click_sink: Arc::new(NoopClickSink),
			indices: IndexNames::default(),
			links: LinkBuilder::default(),
			labels: OverlayLabels::default(),
			theme: None,
			query: QueryState::new(),
			loading_delay: DEFAULT_LOADING_DELAY,
			start_open: true,
		}
	}

	#[must_use]
	pub fn with_click_sink(mut self, sink: Arc<dyn ClickSink>) -> Self {
		self.click_sink = sink;
		self
	}

	#[must_use]
	pub fn with_indices(mut self, indices: IndexNames) -> Self {
		self.indices = indices;
		self
	}

	#[must_use]
	pub fn with_links(mut self, links: LinkBuilder) -> Self {
		self.links = links;
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: OverlayLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Use a bundled theme; unknown names keep the default.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	/// Initial text, category, page and kind filters.
	#[must_use]
	pub fn with_query(mut self, query: QueryState) -> Self {
		self.query = query;
		self
	}

	/// How long a pending cycle may run before the results are cleared.
	#[must_use]
	pub fn with_loading_delay(mut self, delay: Duration) -> Self {
		self.loading_delay = delay;
		self
	}

	/// Whether the overlay is open when the session starts.
	#[must_use]
	pub fn start_open(mut self, open: bool) -> Self {
		self.start_open = open;
		self
	}

	/// Construct the [`App`] without running it.
	pub fn build<'a>(self) -> App<'a> {
		let mut app = App::new(self.client, self.indices);
		app.click_sink = self.click_sink;
		app.links = self.links;
		app.set_labels(self.labels);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_query(self.query);
		app.set_loading_delay(self.loading_delay);
		if self.start_open {
			app.open_overlay();
		}
		app
	}

	/// Run the interactive overlay with the configured options.
	pub fn run(self) -> Result<SearchOutcome> {
		let mut app = self.build();
		app.run()
	}
}

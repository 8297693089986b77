use std::sync::Arc;

use anyhow::{Context, Result};
use docsift::{HttpSearchClient, InsightsSink, SearchOutcome, SearchOverlay, ServiceConfig};
use docsift_search_api::{
	ClickSink, IndexNames, LinkBuilder, NoopClickSink, Normalized, QueryState, SearchClient,
	build_queries, normalize,
};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search overlay.
pub(crate) struct SearchWorkflow {
	overlay: SearchOverlay,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let service = config.service_config()?;
		let overlay = OverlayFactory::build(config, service);
		Ok(Self { overlay })
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		self.overlay.run()
	}
}

/// Helper for translating resolved configuration into a configured overlay.
struct OverlayFactory;

impl OverlayFactory {
	fn build(config: ResolvedConfig, service: ServiceConfig) -> SearchOverlay {
		let links = config.links();
		let ResolvedConfig {
			indices,
			analytics,
			theme,
			query,
			loading_delay,
			..
		} = config;

		let click_sink: Arc<dyn ClickSink> = if analytics.enabled {
			Arc::new(InsightsSink::new(&service, analytics.user_token))
		} else {
			Arc::new(NoopClickSink)
		};
		let client: Arc<dyn SearchClient> = Arc::new(HttpSearchClient::new(&service));

		SearchOverlay::new(client)
			.with_click_sink(click_sink)
			.with_indices(indices)
			.with_links(links)
			.with_theme_name(&theme)
			.with_query(query)
			.with_loading_delay(loading_delay)
	}
}

/// Results of a single search run without a terminal UI.
pub(crate) struct OnceResults {
	pub(crate) query: QueryState,
	pub(crate) normalized: Normalized,
	pub(crate) links: LinkBuilder,
}

/// Run the configured query once against the search service.
pub(crate) fn run_once(config: &ResolvedConfig) -> Result<OnceResults> {
	let service = config.service_config()?;
	let client = HttpSearchClient::new(&service);
	search_once(&client, config.query.clone(), &config.indices, config.links())
}

fn search_once(
	client: &dyn SearchClient,
	query: QueryState,
	indices: &IndexNames,
	links: LinkBuilder,
) -> Result<OnceResults> {
	let queries = build_queries(&query, indices);
	let responses = client
		.multiple_queries(&queries)
		.context("search request failed")?;
	let normalized = normalize(responses, indices);
	info!(
		hits = normalized.bag.total_len(),
		total_pages = normalized.total_pages,
		skipped = normalized.skipped_hits,
		"one-shot search finished"
	);
	Ok(OnceResults {
		query,
		normalized,
		links,
	})
}

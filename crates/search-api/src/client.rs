//! Seams to the hosted search service and its click-analytics endpoint.

use serde::Serialize;

use crate::dispatch::{IndexNames, IndexQuery};
use crate::error::SearchError;
use crate::normalize::RawIndexResponse;
use crate::types::{ResultBag, Section};

/// Executes a batch of sub-queries as one call.
///
/// Implementations are called from a background thread and must not assume
/// they run on the UI thread. The call has no deadline of its own.
pub trait SearchClient: Send + Sync {
	fn multiple_queries(&self, queries: &[IndexQuery]) -> Result<Vec<RawIndexResponse>, SearchError>;
}

/// A click on a result, attributed to the query that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickEvent {
	pub index: String,
	pub query_id: Option<String>,
	pub object_id: String,
	pub position: Option<u32>,
}

impl ClickEvent {
	/// Describe a click on `row` of `section`, or `None` when the row does not exist.
	#[must_use]
	pub fn for_hit(bag: &ResultBag, indices: &IndexNames, section: Section, row: usize) -> Option<Self> {
		let hit = bag.hit(section, row)?;
		Some(Self {
			index: indices.name(section).to_string(),
			query_id: bag.query_id(section).map(str::to_string),
			object_id: hit.object_id().to_string(),
			position: bag.position(section, row),
		})
	}
}

/// Fire-and-forget receiver for [`ClickEvent`]s.
pub trait ClickSink: Send + Sync {
	fn record(&self, event: ClickEvent);
}

/// Sink that drops every event, used when analytics are disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopClickSink;

impl ClickSink for NoopClickSink {
	fn record(&self, _event: ClickEvent) {}
}

//! Map a batched response back into a [`ResultBag`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::dispatch::IndexNames;
use crate::types::{PagedResults, ResultBag, Section};

/// One per-index entry of a batched response, with hits left undecoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIndexResponse {
	pub index: String,
	#[serde(default)]
	pub hits: Vec<serde_json::Value>,
	#[serde(default)]
	pub page: u32,
	#[serde(default)]
	pub hits_per_page: u32,
	#[serde(default)]
	pub nb_pages: Option<u32>,
	#[serde(default, rename = "queryID")]
	pub query_id: Option<String>,
}

/// Outcome of normalizing one batched response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Normalized {
	pub bag: ResultBag,
	/// Largest page count reported by any sub-response, at least 1.
	pub total_pages: u32,
	/// Hits dropped because they did not match their index's hit shape.
	pub skipped_hits: usize,
}

/// Build a fresh [`ResultBag`] from the responses of one batched call.
///
/// Indices that were not queried stay absent. Responses for unknown index
/// names are ignored apart from their page count; when an index appears
/// twice the first response wins.
#[must_use]
pub fn normalize(responses: Vec<RawIndexResponse>, indices: &IndexNames) -> Normalized {
	let total_pages = responses
		.iter()
		.filter_map(|response| response.nb_pages)
		.max()
		.unwrap_or(1)
		.max(1);

	let mut bag = ResultBag::default();
	let mut skipped_hits = 0;
	for response in responses {
		let Some(section) = indices.section_for(&response.index) else {
			continue;
		};
		match section {
			Section::Manual if bag.manual.is_none() => {
				bag.manual = Some(extract(response, &mut skipped_hits));
			}
			Section::Symbols if bag.symbols.is_none() => {
				bag.symbols = Some(extract(response, &mut skipped_hits));
			}
			Section::Modules if bag.modules.is_none() => {
				bag.modules = Some(extract(response, &mut skipped_hits));
			}
			_ => {}
		}
	}

	Normalized {
		bag,
		total_pages,
		skipped_hits,
	}
}

fn extract<T: DeserializeOwned>(response: RawIndexResponse, skipped: &mut usize) -> PagedResults<T> {
	let mut items = Vec::with_capacity(response.hits.len());
	for hit in response.hits {
		match serde_json::from_value(hit) {
			Ok(item) => items.push(item),
			Err(_) => *skipped += 1,
		}
	}
	PagedResults {
		query_id: response.query_id,
		items,
		hits_per_page: response.hits_per_page,
		page: response.page,
	}
}

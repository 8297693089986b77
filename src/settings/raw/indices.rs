use docsift_search_api::{DEFAULT_BASE_URL, IndexNames};
use serde::Deserialize;

/// Index names on the search service; unset names keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct IndicesSection {
	pub(super) manual: Option<String>,
	pub(super) symbols: Option<String>,
	pub(super) modules: Option<String>,
}

impl IndicesSection {
	pub(super) fn finalize(self) -> IndexNames {
		let defaults = IndexNames::default();
		IndexNames {
			manual: self.manual.unwrap_or(defaults.manual),
			symbols: self.symbols.unwrap_or(defaults.symbols),
			modules: self.modules.unwrap_or(defaults.modules),
		}
	}
}

/// Where result links point.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LinksSection {
	pub(super) base_url: Option<String>,
}

impl LinksSection {
	pub(super) fn finalize(self) -> String {
		self.base_url
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
	}
}

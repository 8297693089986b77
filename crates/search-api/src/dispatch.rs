//! Turn a [`QueryState`] into the batch of per-index sub-queries sent in one call.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::query::QueryState;
use crate::types::{Category, Section, SymbolKind};

/// Query text sent to the manual index when the input is empty.
pub const MANUAL_FALLBACK_QUERY: &str = "Introduction";
/// Query text sent to the symbols index when the input is empty.
pub const SYMBOLS_FALLBACK_QUERY: &str = "serve";
/// Restricts manual hits to paragraph entries.
pub const MANUAL_FILTER: &str = "kind:paragraph";

/// Page size when a single category is shown.
const FILTERED_HITS_PER_PAGE: u32 = 10;
/// Page size when all categories share the screen.
const MIXED_HITS_PER_PAGE: u32 = 5;

/// Names of the three indices on the search service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexNames {
	pub manual: String,
	pub symbols: String,
	pub modules: String,
}

impl Default for IndexNames {
	fn default() -> Self {
		Self {
			manual: "manual".to_string(),
			symbols: "doc_nodes".to_string(),
			modules: "modules".to_string(),
		}
	}
}

impl IndexNames {
	#[must_use]
	pub fn name(&self, section: Section) -> &str {
		match section {
			Section::Manual => &self.manual,
			Section::Symbols => &self.symbols,
			Section::Modules => &self.modules,
		}
	}

	/// The section an index name belongs to, if it is one of ours.
	#[must_use]
	pub fn section_for(&self, index: &str) -> Option<Section> {
		Section::ORDER
			.into_iter()
			.find(|section| self.name(*section) == index)
	}
}

/// Search parameters of one sub-query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
	pub hits_per_page: u32,
	pub page: u32,
	/// Filter expression; empty means unconstrained.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub filters: String,
	pub click_analytics: bool,
}

/// One entry of a batched search call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQuery {
	pub index_name: String,
	pub query: String,
	pub params: QueryParams,
}

impl IndexQuery {
	/// URL-encoded parameter string, query text included, as the batched
	/// endpoint expects it.
	#[must_use]
	pub fn encoded_params(&self) -> String {
		let mut serializer = form_urlencoded::Serializer::new(String::new());
		serializer
			.append_pair("query", &self.query)
			.append_pair("hitsPerPage", &self.params.hits_per_page.to_string())
			.append_pair("page", &self.params.page.to_string());
		if !self.params.filters.is_empty() {
			serializer.append_pair("filters", &self.params.filters);
		}
		serializer.append_pair(
			"clickAnalytics",
			if self.params.click_analytics {
				"true"
			} else {
				"false"
			},
		);
		serializer.finish()
	}
}

/// Page size for the given category.
#[must_use]
pub fn hits_per_page(category: Category) -> u32 {
	if category.is_filtered() {
		FILTERED_HITS_PER_PAGE
	} else {
		MIXED_HITS_PER_PAGE
	}
}

/// Filter expression for the symbols index.
///
/// With [`Category::All`] every filterable kind is included whatever the
/// checkboxes say; otherwise only checked kinds are. No checked kinds yields
/// an empty expression, which leaves the sub-query unconstrained.
#[must_use]
pub fn symbol_filter(state: &QueryState) -> String {
	let clauses: Vec<String> = if state.category().is_filtered() {
		state.kinds().checked().map(kind_clause).collect()
	} else {
		SymbolKind::FILTERABLE.into_iter().map(kind_clause).collect()
	};
	clauses.join(" OR ")
}

fn kind_clause(kind: SymbolKind) -> String {
	format!("kind:{}", kind.tag())
}

fn text_or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
	if text.trim().is_empty() {
		fallback
	} else {
		text
	}
}

/// Build the sub-queries for one request cycle, in manual, symbols, modules order.
#[must_use]
pub fn build_queries(state: &QueryState, indices: &IndexNames) -> Vec<IndexQuery> {
	let category = state.category();
	let params = |filters: String| QueryParams {
		hits_per_page: hits_per_page(category),
		page: state.page(),
		filters,
		click_analytics: true,
	};

	let mut queries = Vec::with_capacity(3);
	if category.includes_manual() {
		queries.push(IndexQuery {
			index_name: indices.manual.clone(),
			query: text_or(state.text(), MANUAL_FALLBACK_QUERY).to_string(),
			params: params(MANUAL_FILTER.to_string()),
		});
	}
	if category.includes_symbols() {
		queries.push(IndexQuery {
			index_name: indices.symbols.clone(),
			query: text_or(state.text(), SYMBOLS_FALLBACK_QUERY).to_string(),
			params: params(symbol_filter(state)),
		});
	}
	if category.includes_modules() {
		queries.push(IndexQuery {
			index_name: indices.modules.clone(),
			query: state.text().to_string(),
			params: params(String::new()),
		});
	}
	queries
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::KindFilters;

	const ALL_KINDS_FILTER: &str = "kind:function OR kind:variable OR kind:class OR kind:enum \
	                                OR kind:interface OR kind:typeAlias OR kind:namespace";

	#[test]
	fn every_category_builds_between_one_and_three_queries() {
		for category in Category::ALL {
			for kinds in [KindFilters::all(), KindFilters::none()] {
				let state = QueryState::new()
					.with_category(category)
					.with_kinds(kinds);
				let count = build_queries(&state, &IndexNames::default()).len();
				assert!((1..=3).contains(&count), "{category} built {count} queries");
			}
		}
	}

	#[test]
	fn empty_input_in_all_uses_fallbacks() {
		let state = QueryState::new();
		let queries = build_queries(&state, &IndexNames::default());
		let summary: Vec<(&str, &str)> = queries
			.iter()
			.map(|query| (query.index_name.as_str(), query.query.as_str()))
			.collect();
		assert_eq!(summary, vec![
			("manual", "Introduction"),
			("doc_nodes", "serve"),
			("modules", ""),
		]);
		assert_eq!(queries[0].params.filters, MANUAL_FILTER);
		assert_eq!(queries[1].params.filters, ALL_KINDS_FILTER);
		assert!(queries[2].params.filters.is_empty());
		assert!(queries.iter().all(|query| query.params.hits_per_page == 5));
		assert!(queries.iter().all(|query| query.params.click_analytics));
	}

	#[test]
	fn all_category_ignores_kind_checkboxes() {
		let state = QueryState::new().with_kinds(KindFilters::only([SymbolKind::Class]));
		assert_eq!(symbol_filter(&state), ALL_KINDS_FILTER);
	}

	#[test]
	fn symbols_category_with_single_kind() {
		let state = QueryState::new()
			.with_category(Category::Symbols)
			.with_kinds(KindFilters::only([SymbolKind::Function]))
			.with_page(2);
		let queries = build_queries(&state, &IndexNames::default());
		assert_eq!(queries.len(), 1);
		let query = &queries[0];
		assert_eq!(query.index_name, "doc_nodes");
		assert_eq!(query.params.filters, "kind:function");
		assert_eq!(query.params.page, 2);
		assert_eq!(query.params.hits_per_page, 10);
	}

	#[test]
	fn symbols_category_without_kinds_is_unconstrained() {
		let state = QueryState::new()
			.with_category(Category::Symbols)
			.with_kinds(KindFilters::none());
		let queries = build_queries(&state, &IndexNames::default());
		assert_eq!(queries.len(), 1);
		assert!(queries[0].params.filters.is_empty());
		assert!(!queries[0].encoded_params().contains("filters="));
	}

	#[test]
	fn whitespace_input_counts_as_empty_except_for_modules() {
		let state = QueryState::new().with_text("  ");
		let queries = build_queries(&state, &IndexNames::default());
		assert_eq!(queries[0].query, MANUAL_FALLBACK_QUERY);
		assert_eq!(queries[1].query, SYMBOLS_FALLBACK_QUERY);
		assert_eq!(queries[2].query, "  ");
	}

	#[test]
	fn typed_text_is_sent_to_every_index() {
		let state = QueryState::new()
			.with_text("Deno.serve")
			.with_category(Category::Manual);
		let queries = build_queries(&state, &IndexNames::default());
		assert_eq!(queries.len(), 1);
		assert_eq!(queries[0].query, "Deno.serve");
		assert_eq!(queries[0].params.hits_per_page, 10);
	}

	#[test]
	fn encoded_params_are_form_encoded() {
		let state = QueryState::new()
			.with_text("read file")
			.with_category(Category::Symbols)
			.with_kinds(KindFilters::only([SymbolKind::Function, SymbolKind::Class]));
		let query = &build_queries(&state, &IndexNames::default())[0];
		assert_eq!(
			query.encoded_params(),
			"query=read+file&hitsPerPage=10&page=0&filters=kind%3Afunction+OR+kind%3Aclass&clickAnalytics=true"
		);
	}

	#[test]
	fn custom_index_names_are_used() {
		let indices = IndexNames {
			manual: "docs".into(),
			symbols: "api".into(),
			modules: "registry".into(),
		};
		let names: Vec<String> = build_queries(&QueryState::new(), &indices)
			.into_iter()
			.map(|query| query.index_name)
			.collect();
		assert_eq!(names, vec!["docs", "api", "registry"]);
		assert_eq!(indices.section_for("api"), Some(Section::Symbols));
		assert_eq!(indices.section_for("other"), None);
	}
}

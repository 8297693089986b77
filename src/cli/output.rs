use std::fmt::Write;

use anyhow::Result;
use docsift::SearchOutcome;
use docsift_search_api::{HitRef, Section};
use serde_json::{Value, json};

use crate::workflow::OnceResults;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	match &outcome.activation {
		Some(activation) => println!("{}", activation.href),
		None => println!("No result opened (query: '{}')", outcome.query),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let activation = match &outcome.activation {
		Some(activation) => json!({
			"section": activation.section,
			"objectId": activation.object_id,
			"title": activation.title,
			"href": activation.href,
		}),
		None => Value::Null,
	};

	let payload = json!({
		"query": outcome.query,
		"category": outcome.category,
		"activation": activation,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Render one-shot results as indented plain text grouped by section.
pub(crate) fn format_results_plain(results: &OnceResults) -> String {
	let bag = &results.normalized.bag;
	let mut out = String::new();
	for section in bag.sections() {
		let _ = writeln!(out, "{} ({})", section.label(), bag.len(section));
		for row in 0..bag.len(section) {
			let Some(hit) = bag.hit(section, row) else {
				continue;
			};
			let badge = match hit {
				HitRef::Symbol(symbol) => format!("[{}] ", symbol.kind.badge()),
				_ => String::new(),
			};
			let _ = writeln!(out, "  {badge}{}  {}", hit.title(), results.links.hit(hit));
		}
	}
	if bag.is_empty() {
		let _ = writeln!(out, "No results");
	}
	let _ = write!(
		out,
		"Page {} of {}",
		results.query.page().saturating_add(1),
		results.normalized.total_pages
	);
	out
}

pub(crate) fn print_results_plain(results: &OnceResults) {
	println!("{}", format_results_plain(results));
}

/// Format one-shot results as a JSON document.
pub(crate) fn format_results_json(results: &OnceResults) -> Result<String> {
	let bag = &results.normalized.bag;
	let sections: Vec<Value> = bag
		.sections()
		.map(|section| section_json(results, section))
		.collect();

	let payload = json!({
		"query": results.query.text(),
		"category": results.query.category(),
		"page": results.query.page(),
		"totalPages": results.normalized.total_pages,
		"skippedHits": results.normalized.skipped_hits,
		"sections": sections,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_results_json(results: &OnceResults) -> Result<()> {
	println!("{}", format_results_json(results)?);
	Ok(())
}

fn section_json(results: &OnceResults, section: Section) -> Value {
	let bag = &results.normalized.bag;
	let hits: Vec<Value> = (0..bag.len(section))
		.filter_map(|row| bag.hit(section, row))
		.map(|hit| {
			json!({
				"objectId": hit.object_id(),
				"title": hit.title(),
				"href": results.links.hit(hit),
				"excerpt": hit.excerpt(),
			})
		})
		.collect();
	json!({
		"section": section,
		"queryId": bag.query_id(section),
		"hits": hits,
	})
}

#[cfg(test)]
mod tests {
	use docsift::Activation;
	use docsift_search_api::{
		Category, LinkBuilder, ModuleHit, Normalized, PagedResults, QueryState, ResultBag,
	};

	use super::*;

	fn module_results() -> OnceResults {
		OnceResults {
			query: QueryState::new()
				.with_text("oak")
				.with_category(Category::Modules),
			normalized: Normalized {
				bag: ResultBag {
					modules: Some(PagedResults {
						query_id: Some("q1".into()),
						items: vec![ModuleHit {
							object_id: "x1".into(),
							name: "oak".into(),
							description: Some("Middleware framework".into()),
						}],
						hits_per_page: 10,
						page: 0,
					}),
					..ResultBag::default()
				},
				total_pages: 2,
				skipped_hits: 0,
			},
			links: LinkBuilder::default(),
		}
	}

	#[test]
	fn json_format_includes_activation() {
		let outcome = SearchOutcome {
			query: "oak".into(),
			category: Category::Modules,
			activation: Some(Activation {
				section: Section::Modules,
				object_id: "x1".into(),
				title: "oak".into(),
				href: "https://deno.land/x/oak".into(),
				excerpt: None,
			}),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["category"], "modules");
		assert_eq!(value["activation"]["section"], "modules");
		assert_eq!(value["activation"]["href"], "https://deno.land/x/oak");
	}

	#[test]
	fn json_format_without_activation_is_null() {
		let outcome = SearchOutcome {
			query: String::new(),
			category: Category::All,
			activation: None,
		};
		let value: Value =
			serde_json::from_str(&format_outcome_json(&outcome).expect("json")).expect("parse");
		assert!(value["activation"].is_null());
	}

	#[test]
	fn plain_results_list_sections_and_links() {
		let text = format_results_plain(&module_results());
		assert_eq!(
			text,
			"Modules (1)\n  oak  https://deno.land/x/oak\nPage 1 of 2"
		);
	}

	#[test]
	fn json_results_carry_query_ids_and_hrefs() {
		let json = format_results_json(&module_results()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["totalPages"], 2);
		assert_eq!(value["sections"][0]["section"], "modules");
		assert_eq!(value["sections"][0]["queryId"], "q1");
		assert_eq!(value["sections"][0]["hits"][0]["href"], "https://deno.land/x/oak");
		assert_eq!(value["sections"][0]["hits"][0]["excerpt"], "Middleware framework");
	}
}

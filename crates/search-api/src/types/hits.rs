use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::SymbolKind;

/// A paragraph of the manual.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualHit {
	#[serde(rename = "objectID")]
	pub object_id: String,
	pub doc_path: String,
	/// Heading levels keyed `lvl0`, `lvl1`, ... from the outermost heading inwards.
	#[serde(default)]
	pub hierarchy: BTreeMap<String, Option<String>>,
	#[serde(default)]
	pub anchor: Option<String>,
	#[serde(default)]
	pub content: Option<String>,
}

impl ManualHit {
	/// Non-empty headings from the outermost level inwards.
	#[must_use]
	pub fn breadcrumbs(&self) -> Vec<&str> {
		let mut levels: Vec<(u32, &Option<String>)> = self
			.hierarchy
			.iter()
			.map(|(key, level)| (level_depth(key), level))
			.collect();
		levels.sort_by_key(|(depth, _)| *depth);
		levels
			.into_iter()
			.filter_map(|(_, level)| level.as_deref())
			.map(str::trim)
			.filter(|level| !level.is_empty())
			.collect()
	}

	/// Innermost heading, or the document path when the hit has no headings.
	#[must_use]
	pub fn title(&self) -> &str {
		self.breadcrumbs()
			.last()
			.copied()
			.unwrap_or(self.doc_path.as_str())
	}
}

/// Numeric depth of a `lvlN` key; unrecognised keys sort last.
fn level_depth(key: &str) -> u32 {
	key.strip_prefix("lvl")
		.and_then(|depth| depth.parse().ok())
		.unwrap_or(u32::MAX)
}

/// A third-party module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleHit {
	#[serde(rename = "objectID")]
	pub object_id: String,
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
}

/// Where a symbol is declared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
	pub filename: String,
	pub line: u32,
	pub col: u32,
}

/// An API symbol from the runtime or a published package.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolHit {
	#[serde(rename = "objectID")]
	pub object_id: String,
	pub name: String,
	/// Identifier of the package the symbol belongs to, `deno` for the runtime.
	pub source: String,
	#[serde(default)]
	pub path: Option<String>,
	#[serde(default)]
	pub doc: Option<String>,
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub tags: Vec<String>,
	pub kind: SymbolKind,
	pub version: String,
	pub location: Location,
}

impl SymbolHit {
	/// First line of the symbol's documentation.
	#[must_use]
	pub fn summary(&self) -> Option<&str> {
		self.doc
			.as_deref()
			.and_then(|doc| doc.lines().map(str::trim).find(|line| !line.is_empty()))
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn manual_hit_breadcrumbs_skip_missing_levels() {
		let hit: ManualHit = serde_json::from_value(json!({
			"objectID": "m-1",
			"docPath": "getting_started/installation",
			"hierarchy": {"lvl0": "Getting Started", "lvl1": null, "lvl2": "Installation"},
			"anchor": "download-and-install",
			"content": "Deno works on macOS, Linux, and Windows."
		}))
		.unwrap();
		assert_eq!(hit.breadcrumbs(), vec!["Getting Started", "Installation"]);
		assert_eq!(hit.title(), "Installation");
	}

	#[test]
	fn manual_hit_breadcrumbs_order_deep_levels_numerically() {
		let hierarchy: BTreeMap<String, Option<String>> = (0..12)
			.map(|depth| (format!("lvl{depth}"), Some(format!("H{depth}"))))
			.collect();
		let hit = ManualHit {
			object_id: "m-3".into(),
			doc_path: "deep".into(),
			hierarchy,
			anchor: None,
			content: None,
		};
		let expected: Vec<String> = (0..12).map(|depth| format!("H{depth}")).collect();
		assert_eq!(hit.breadcrumbs(), expected);
		assert_eq!(hit.title(), "H11");
	}

	#[test]
	fn manual_hit_title_falls_back_to_path() {
		let hit: ManualHit = serde_json::from_value(json!({
			"objectID": "m-2",
			"docPath": "introduction"
		}))
		.unwrap();
		assert_eq!(hit.title(), "introduction");
	}

	#[test]
	fn symbol_hit_decodes_optional_fields() {
		let hit: SymbolHit = serde_json::from_value(json!({
			"objectID": "s-1",
			"name": "serve",
			"source": "deno",
			"doc": "\n  Serves HTTP requests.\n\nMore details.",
			"kind": "function",
			"version": "1.40.0",
			"location": {"filename": "lib.deno.ns.d.ts", "line": 10, "col": 2}
		}))
		.unwrap();
		assert_eq!(hit.kind, SymbolKind::Function);
		assert!(hit.tags.is_empty());
		assert_eq!(hit.summary(), Some("Serves HTTP requests."));
	}
}

use url::form_urlencoded;

use crate::types::{HitRef, ManualHit, ModuleHit, SymbolHit};

/// Site hosting the manual, API reference and module registry.
pub const DEFAULT_BASE_URL: &str = "https://deno.land";

/// Source identifier of symbols that belong to the runtime itself.
const RUNTIME_SOURCE: &str = "deno";

/// Builds the page a hit links to. Pure string construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkBuilder {
	base: String,
}

impl Default for LinkBuilder {
	fn default() -> Self {
		Self::new(DEFAULT_BASE_URL)
	}
}

impl LinkBuilder {
	#[must_use]
	pub fn new(base: impl Into<String>) -> Self {
		let mut base = base.into();
		while base.ends_with('/') {
			base.pop();
		}
		Self { base }
	}

	#[must_use]
	pub fn base(&self) -> &str {
		&self.base
	}

	#[must_use]
	pub fn hit(&self, hit: HitRef<'_>) -> String {
		match hit {
			HitRef::Manual(hit) => self.manual(hit),
			HitRef::Symbol(hit) => self.symbol(hit),
			HitRef::Module(hit) => self.module(hit),
		}
	}

	#[must_use]
	pub fn manual(&self, hit: &ManualHit) -> String {
		let mut href = format!("{}/manual/{}", self.base, hit.doc_path.trim_start_matches('/'));
		if let Some(anchor) = hit
			.anchor
			.as_deref()
			.map(|anchor| anchor.trim_start_matches('#'))
			.filter(|anchor| !anchor.is_empty())
		{
			href.push('#');
			href.push_str(anchor);
		}
		href
	}

	#[must_use]
	pub fn module(&self, hit: &ModuleHit) -> String {
		let name: String = form_urlencoded::byte_serialize(hit.name.as_bytes()).collect();
		format!("{}/x/{name}", self.base)
	}

	#[must_use]
	pub fn symbol(&self, hit: &SymbolHit) -> String {
		let name: String = form_urlencoded::byte_serialize(hit.name.as_bytes()).collect();
		if hit.source == RUNTIME_SOURCE {
			return format!("{}/api@{}?s={name}", self.base, hit.version);
		}
		match hit
			.path
			.as_deref()
			.map(|path| path.trim_start_matches('/'))
			.filter(|path| !path.is_empty())
		{
			Some(path) => format!("{}/{}@{}/{path}?s={name}", self.base, hit.source, hit.version),
			None => format!("{}/{}@{}?s={name}", self.base, hit.source, hit.version),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use super::*;
	use crate::types::{Location, SymbolKind};

	fn symbol(source: &str, path: Option<&str>) -> SymbolHit {
		SymbolHit {
			object_id: "s".into(),
			name: "Deno.serve".into(),
			source: source.into(),
			path: path.map(str::to_string),
			doc: None,
			category: None,
			tags: Vec::new(),
			kind: SymbolKind::Function,
			version: "1.40.0".into(),
			location: Location {
				filename: "mod.ts".into(),
				line: 1,
				col: 0,
			},
		}
	}

	#[test]
	fn manual_links_include_anchor_when_present() {
		let mut hit = ManualHit {
			object_id: "m".into(),
			doc_path: "/basics/modules".into(),
			hierarchy: BTreeMap::new(),
			anchor: Some("#remote-import".into()),
			content: None,
		};
		let links = LinkBuilder::new("https://deno.land/");
		assert_eq!(links.manual(&hit), "https://deno.land/manual/basics/modules#remote-import");
		hit.anchor = None;
		assert_eq!(links.manual(&hit), "https://deno.land/manual/basics/modules");
	}

	#[test]
	fn module_names_are_encoded() {
		let links = LinkBuilder::default();
		let hit = ModuleHit {
			object_id: "x".into(),
			name: "oak router".into(),
			description: None,
		};
		assert_eq!(links.module(&hit), "https://deno.land/x/oak+router");
	}

	#[test]
	fn runtime_symbols_link_to_the_api_reference() {
		let links = LinkBuilder::default();
		assert_eq!(
			links.symbol(&symbol("deno", None)),
			"https://deno.land/api@1.40.0?s=Deno.serve"
		);
	}

	#[test]
	fn package_symbols_link_to_their_module_path() {
		let links = LinkBuilder::default();
		assert_eq!(
			links.symbol(&symbol("std", Some("/http/server.ts"))),
			"https://deno.land/std@1.40.0/http/server.ts?s=Deno.serve"
		);
		assert_eq!(
			links.symbol(&symbol("std", None)),
			"https://deno.land/std@1.40.0?s=Deno.serve"
		);
	}

	#[test]
	fn module_links_use_the_registry() {
		let hit = ModuleHit {
			object_id: "oak".into(),
			name: "oak".into(),
			description: None,
		};
		assert_eq!(LinkBuilder::new("http://localhost:8000").module(&hit), "http://localhost:8000/x/oak");
	}
}

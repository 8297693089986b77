use serde::Serialize;

use super::{Category, ManualHit, ModuleHit, SymbolHit};

/// One page of hits from a single index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResults<T> {
	/// Correlation token for click analytics, present when requested and granted.
	pub query_id: Option<String>,
	pub items: Vec<T>,
	pub hits_per_page: u32,
	pub page: u32,
}

impl<T> PagedResults<T> {
	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// 1-based position of a row across all pages, as reported to click analytics.
	#[must_use]
	pub fn position_of(&self, row: usize) -> u32 {
		let row = u32::try_from(row).unwrap_or(u32::MAX);
		self.page
			.saturating_mul(self.hits_per_page)
			.saturating_add(row)
			.saturating_add(1)
	}
}

/// A rendered group of results; one per index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
	Manual,
	Symbols,
	Modules,
}

impl Section {
	/// Display order of sections inside the overlay.
	pub const ORDER: [Section; 3] = [Section::Manual, Section::Symbols, Section::Modules];

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Manual => "Manual",
			Self::Symbols => "Symbols",
			Self::Modules => "Modules",
		}
	}

	/// The category that shows this section on its own.
	#[must_use]
	pub const fn category(self) -> Category {
		match self {
			Self::Manual => Category::Manual,
			Self::Symbols => Category::Symbols,
			Self::Modules => Category::Modules,
		}
	}
}

/// Borrowed view of a single hit of any kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitRef<'a> {
	Manual(&'a ManualHit),
	Symbol(&'a SymbolHit),
	Module(&'a ModuleHit),
}

impl<'a> HitRef<'a> {
	#[must_use]
	pub fn object_id(self) -> &'a str {
		match self {
			Self::Manual(hit) => &hit.object_id,
			Self::Symbol(hit) => &hit.object_id,
			Self::Module(hit) => &hit.object_id,
		}
	}

	#[must_use]
	pub fn title(self) -> &'a str {
		match self {
			Self::Manual(hit) => hit.title(),
			Self::Symbol(hit) => &hit.name,
			Self::Module(hit) => &hit.name,
		}
	}

	/// Free-form text shown under the title, if any.
	#[must_use]
	pub fn excerpt(self) -> Option<&'a str> {
		match self {
			Self::Manual(hit) => hit.content.as_deref(),
			Self::Symbol(hit) => hit.summary(),
			Self::Module(hit) => hit.description.as_deref(),
		}
	}
}

/// Results of one request cycle, grouped by index.
///
/// A bag is always replaced as a whole when a newer cycle resolves; fields
/// are never merged across cycles. An absent field means the index was not
/// queried in that cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResultBag {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub manual: Option<PagedResults<ManualHit>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub modules: Option<PagedResults<ModuleHit>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub symbols: Option<PagedResults<SymbolHit>>,
}

impl ResultBag {
	/// Sections that were queried, in display order.
	pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
		Section::ORDER
			.into_iter()
			.filter(|section| self.contains(*section))
	}

	#[must_use]
	pub fn contains(&self, section: Section) -> bool {
		match section {
			Section::Manual => self.manual.is_some(),
			Section::Symbols => self.symbols.is_some(),
			Section::Modules => self.modules.is_some(),
		}
	}

	/// Number of hits in one section; zero when it was not queried.
	#[must_use]
	pub fn len(&self, section: Section) -> usize {
		match section {
			Section::Manual => self.manual.as_ref().map_or(0, PagedResults::len),
			Section::Symbols => self.symbols.as_ref().map_or(0, PagedResults::len),
			Section::Modules => self.modules.as_ref().map_or(0, PagedResults::len),
		}
	}

	/// Number of hits across every section.
	#[must_use]
	pub fn total_len(&self) -> usize {
		Section::ORDER.into_iter().map(|section| self.len(section)).sum()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.total_len() == 0
	}

	#[must_use]
	pub fn hit(&self, section: Section, row: usize) -> Option<HitRef<'_>> {
		match section {
			Section::Manual => self.manual.as_ref()?.items.get(row).map(HitRef::Manual),
			Section::Symbols => self.symbols.as_ref()?.items.get(row).map(HitRef::Symbol),
			Section::Modules => self.modules.as_ref()?.items.get(row).map(HitRef::Module),
		}
	}

	/// Map a row index over the concatenation of all sections back to its section.
	#[must_use]
	pub fn locate(&self, flat: usize) -> Option<(Section, usize)> {
		let mut remaining = flat;
		for section in Section::ORDER {
			let len = self.len(section);
			if remaining < len {
				return Some((section, remaining));
			}
			remaining -= len;
		}
		None
	}

	#[must_use]
	pub fn query_id(&self, section: Section) -> Option<&str> {
		match section {
			Section::Manual => self.manual.as_ref()?.query_id.as_deref(),
			Section::Symbols => self.symbols.as_ref()?.query_id.as_deref(),
			Section::Modules => self.modules.as_ref()?.query_id.as_deref(),
		}
	}

	/// 1-based analytics position of a row, if the section was queried.
	#[must_use]
	pub fn position(&self, section: Section, row: usize) -> Option<u32> {
		match section {
			Section::Manual => self.manual.as_ref().map(|page| page.position_of(row)),
			Section::Symbols => self.symbols.as_ref().map(|page| page.position_of(row)),
			Section::Modules => self.modules.as_ref().map(|page| page.position_of(row)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn module(name: &str) -> ModuleHit {
		ModuleHit {
			object_id: format!("mod-{name}"),
			name: name.to_string(),
			description: None,
		}
	}

	fn page<T>(items: Vec<T>, page: u32) -> PagedResults<T> {
		PagedResults {
			query_id: Some("q-1".into()),
			items,
			hits_per_page: 5,
			page,
		}
	}

	#[test]
	fn locate_walks_sections_in_display_order() {
		let bag = ResultBag {
			manual: Some(page(Vec::new(), 0)),
			modules: Some(page(vec![module("oak"), module("fresh")], 0)),
			symbols: None,
		};
		assert_eq!(bag.sections().collect::<Vec<_>>(), vec![
			Section::Manual,
			Section::Modules
		]);
		assert_eq!(bag.locate(0), Some((Section::Modules, 0)));
		assert_eq!(bag.locate(1), Some((Section::Modules, 1)));
		assert_eq!(bag.locate(2), None);
		assert_eq!(bag.hit(Section::Modules, 1).map(HitRef::title), Some("fresh"));
	}

	#[test]
	fn positions_count_previous_pages() {
		let bag = ResultBag {
			modules: Some(page(vec![module("oak")], 2)),
			..ResultBag::default()
		};
		assert_eq!(bag.position(Section::Modules, 0), Some(11));
		assert_eq!(bag.position(Section::Manual, 0), None);
		assert_eq!(bag.query_id(Section::Modules), Some("q-1"));
	}
}

//! User-editable query state.
//!
//! Every mutator reports whether it changed anything so callers only start a
//! new request cycle on real changes. Mutators that alter which results are
//! relevant (text, category, kind filters) reset the page to zero.

use crate::types::{Category, KindFilters, SymbolKind};

/// Free text, category, kind filters and page of the overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
	text: String,
	category: Category,
	page: u32,
	kinds: KindFilters,
}

/// Whether the "previous page" control is enabled.
#[must_use]
pub fn can_go_previous(page: u32) -> bool {
	page > 0
}

/// Whether the "next page" control is enabled.
#[must_use]
pub fn can_go_next(page: u32, total_pages: u32) -> bool {
	page.saturating_add(1) < total_pages
}

impl QueryState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.text = text.into();
		self
	}

	#[must_use]
	pub fn with_category(mut self, category: Category) -> Self {
		self.category = category;
		self
	}

	#[must_use]
	pub fn with_page(mut self, page: u32) -> Self {
		self.page = page;
		self
	}

	#[must_use]
	pub fn with_kinds(mut self, kinds: KindFilters) -> Self {
		self.kinds = kinds;
		self
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	#[must_use]
	pub fn category(&self) -> Category {
		self.category
	}

	#[must_use]
	pub fn page(&self) -> u32 {
		self.page
	}

	#[must_use]
	pub fn kinds(&self) -> &KindFilters {
		&self.kinds
	}

	/// Replace the free text.
	pub fn set_text(&mut self, text: &str) -> bool {
		if self.text == text {
			return false;
		}
		self.text.clear();
		self.text.push_str(text);
		self.page = 0;
		true
	}

	pub fn set_category(&mut self, category: Category) -> bool {
		if self.category == category {
			return false;
		}
		self.category = category;
		self.page = 0;
		true
	}

	/// Move to the next (or previous) tab.
	pub fn cycle_category(&mut self, forward: bool) -> bool {
		let next = if forward {
			self.category.next()
		} else {
			self.category.previous()
		};
		self.set_category(next)
	}

	pub fn set_kind(&mut self, kind: SymbolKind, checked: bool) -> bool {
		let changed = self.kinds.set(kind, checked);
		if changed {
			self.page = 0;
		}
		changed
	}

	pub fn toggle_kind(&mut self, kind: SymbolKind) -> bool {
		let changed = self.kinds.toggle(kind);
		if changed {
			self.page = 0;
		}
		changed
	}

	/// Advance one page unless already on the last of `total_pages`.
	pub fn next_page(&mut self, total_pages: u32) -> bool {
		if !can_go_next(self.page, total_pages) {
			return false;
		}
		self.page += 1;
		true
	}

	pub fn previous_page(&mut self) -> bool {
		if !can_go_previous(self.page) {
			return false;
		}
		self.page -= 1;
		true
	}
}

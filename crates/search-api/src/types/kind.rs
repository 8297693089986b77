use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::UnknownName;

/// Declaration kind of an API symbol as reported by the symbols index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymbolKind {
	Function,
	Variable,
	Class,
	Enum,
	Interface,
	TypeAlias,
	Namespace,
	/// Any kind the service reports that cannot be filtered on.
	#[serde(other)]
	Other,
}

impl SymbolKind {
	/// Kinds exposed as filter checkboxes, in display order.
	pub const FILTERABLE: [SymbolKind; 7] = [
		SymbolKind::Function,
		SymbolKind::Variable,
		SymbolKind::Class,
		SymbolKind::Enum,
		SymbolKind::Interface,
		SymbolKind::TypeAlias,
		SymbolKind::Namespace,
	];

	/// Value of the `kind` attribute in the symbols index.
	#[must_use]
	pub const fn tag(self) -> &'static str {
		match self {
			Self::Function => "function",
			Self::Variable => "variable",
			Self::Class => "class",
			Self::Enum => "enum",
			Self::Interface => "interface",
			Self::TypeAlias => "typeAlias",
			Self::Namespace => "namespace",
			Self::Other => "other",
		}
	}

	/// Plural label used next to the filter checkbox.
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Function => "Functions",
			Self::Variable => "Variables",
			Self::Class => "Classes",
			Self::Enum => "Enums",
			Self::Interface => "Interfaces",
			Self::TypeAlias => "Type Aliases",
			Self::Namespace => "Namespaces",
			Self::Other => "Other",
		}
	}

	/// Short badge rendered in front of a symbol row.
	#[must_use]
	pub const fn badge(self) -> &'static str {
		match self {
			Self::Function => "fn",
			Self::Variable => "var",
			Self::Class => "class",
			Self::Enum => "enum",
			Self::Interface => "iface",
			Self::TypeAlias => "type",
			Self::Namespace => "ns",
			Self::Other => "?",
		}
	}

	#[must_use]
	pub const fn is_filterable(self) -> bool {
		!matches!(self, Self::Other)
	}
}

impl fmt::Display for SymbolKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}

impl FromStr for SymbolKind {
	type Err = UnknownName;

	/// Accepts the index tag in any case, with or without separators
	/// (`typeAlias`, `type-alias`, `type_alias`).
	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized: String = value
			.trim()
			.chars()
			.filter(|ch| !matches!(ch, '-' | '_' | ' '))
			.map(|ch| ch.to_ascii_lowercase())
			.collect();
		Self::FILTERABLE
			.into_iter()
			.find(|kind| kind.tag().to_ascii_lowercase() == normalized)
			.ok_or_else(|| UnknownName {
				what: "symbol kind",
				value: value.to_string(),
			})
	}
}

/// Checkbox state for every filterable [`SymbolKind`], in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KindFilters {
	checked: IndexMap<SymbolKind, bool>,
}

impl Default for KindFilters {
	fn default() -> Self {
		Self::all()
	}
}

impl KindFilters {
	/// Every kind checked.
	#[must_use]
	pub fn all() -> Self {
		Self::from_fn(|_| true)
	}

	/// Every kind unchecked.
	#[must_use]
	pub fn none() -> Self {
		Self::from_fn(|_| false)
	}

	/// Only the given kinds checked. Unfilterable kinds are ignored.
	#[must_use]
	pub fn only(kinds: impl IntoIterator<Item = SymbolKind>) -> Self {
		let mut filters = Self::none();
		for kind in kinds {
			filters.set(kind, true);
		}
		filters
	}

	fn from_fn(mut checked: impl FnMut(SymbolKind) -> bool) -> Self {
		Self {
			checked: SymbolKind::FILTERABLE
				.into_iter()
				.map(|kind| (kind, checked(kind)))
				.collect(),
		}
	}

	#[must_use]
	pub fn is_checked(&self, kind: SymbolKind) -> bool {
		self.checked.get(&kind).copied().unwrap_or(false)
	}

	/// Set one checkbox. Returns `true` when the state changed.
	pub fn set(&mut self, kind: SymbolKind, checked: bool) -> bool {
		match self.checked.get_mut(&kind) {
			Some(slot) if *slot != checked => {
				*slot = checked;
				true
			}
			_ => false,
		}
	}

	/// Flip one checkbox. Returns `true` when the state changed.
	pub fn toggle(&mut self, kind: SymbolKind) -> bool {
		let checked = self.is_checked(kind);
		self.set(kind, !checked)
	}

	/// Checked kinds in display order.
	pub fn checked(&self) -> impl Iterator<Item = SymbolKind> + '_ {
		self.checked
			.iter()
			.filter(|(_, checked)| **checked)
			.map(|(kind, _)| *kind)
	}

	/// Every filterable kind paired with its checkbox state.
	pub fn iter(&self) -> impl Iterator<Item = (SymbolKind, bool)> + '_ {
		self.checked.iter().map(|(kind, checked)| (*kind, *checked))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_kind_deserializes_as_other() {
		let kind: SymbolKind = serde_json::from_str("\"moduleDoc\"").unwrap();
		assert_eq!(kind, SymbolKind::Other);
		let kind: SymbolKind = serde_json::from_str("\"typeAlias\"").unwrap();
		assert_eq!(kind, SymbolKind::TypeAlias);
	}

	#[test]
	fn parses_tags_with_separators() {
		assert_eq!("type-alias".parse::<SymbolKind>(), Ok(SymbolKind::TypeAlias));
		assert_eq!("Function".parse::<SymbolKind>(), Ok(SymbolKind::Function));
		assert!("other".parse::<SymbolKind>().is_err());
	}

	#[test]
	fn set_reports_changes_and_ignores_other() {
		let mut filters = KindFilters::all();
		assert!(!filters.set(SymbolKind::Class, true));
		assert!(filters.set(SymbolKind::Class, false));
		assert!(!filters.is_checked(SymbolKind::Class));
		assert!(!filters.set(SymbolKind::Other, true));
		assert!(!filters.is_checked(SymbolKind::Other));
	}

	#[test]
	fn checked_preserves_display_order() {
		let filters = KindFilters::only([SymbolKind::Namespace, SymbolKind::Function]);
		let checked: Vec<_> = filters.checked().collect();
		assert_eq!(checked, vec![SymbolKind::Function, SymbolKind::Namespace]);
	}
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownName;

/// User-facing result-type filter shown as the overlay's tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	#[default]
	All,
	Manual,
	Modules,
	Symbols,
}

impl Category {
	/// Every category in tab order.
	pub const ALL: [Category; 4] = [
		Category::All,
		Category::Manual,
		Category::Modules,
		Category::Symbols,
	];

	/// Tab label.
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::All => "All",
			Self::Manual => "Manual",
			Self::Modules => "Modules",
			Self::Symbols => "Symbols",
		}
	}

	/// Lowercase identifier used in configuration files and on the command line.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::All => "all",
			Self::Manual => "manual",
			Self::Modules => "modules",
			Self::Symbols => "symbols",
		}
	}

	/// Whether a narrower category than [`Category::All`] is active.
	#[must_use]
	pub const fn is_filtered(self) -> bool {
		!matches!(self, Self::All)
	}

	#[must_use]
	pub const fn includes_manual(self) -> bool {
		matches!(self, Self::All | Self::Manual)
	}

	#[must_use]
	pub const fn includes_symbols(self) -> bool {
		matches!(self, Self::All | Self::Symbols)
	}

	#[must_use]
	pub const fn includes_modules(self) -> bool {
		matches!(self, Self::All | Self::Modules)
	}

	/// The category after this one, wrapping around.
	#[must_use]
	pub fn next(self) -> Self {
		let index = self.position();
		Self::ALL[(index + 1) % Self::ALL.len()]
	}

	/// The category before this one, wrapping around.
	#[must_use]
	pub fn previous(self) -> Self {
		let index = self.position();
		Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
	}

	fn position(self) -> usize {
		Self::ALL
			.iter()
			.position(|category| *category == self)
			.unwrap_or(0)
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Category {
	type Err = UnknownName;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|category| category.as_str() == normalized)
			.ok_or_else(|| UnknownName {
				what: "category",
				value: value.to_string(),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cycling_wraps_in_both_directions() {
		assert_eq!(Category::Symbols.next(), Category::All);
		assert_eq!(Category::All.previous(), Category::Symbols);
		assert_eq!(Category::Manual.next(), Category::Modules);
	}

	#[test]
	fn parses_case_insensitively() {
		assert_eq!("Symbols".parse::<Category>(), Ok(Category::Symbols));
		assert_eq!(" all ".parse::<Category>(), Ok(Category::All));
		assert!("packages".parse::<Category>().is_err());
	}

	#[test]
	fn all_includes_every_index() {
		let all = Category::All;
		assert!(all.includes_manual() && all.includes_symbols() && all.includes_modules());
		assert!(!Category::Modules.includes_manual());
		assert!(!Category::Manual.includes_symbols());
	}
}

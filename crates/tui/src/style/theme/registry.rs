use super::builtins;
use super::types::{Theme, ThemeRegistration};

/// Look up a bundled theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtins::registrations()
		.into_iter()
		.find(|registration| registration.answers_to(name.trim()))
		.map(|registration| registration.theme)
}

/// Canonical names of the bundled themes, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names: Vec<String> = builtins::registrations()
		.into_iter()
		.map(|registration: ThemeRegistration| registration.name)
		.collect();
	names.sort();
	names
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn aliases_resolve_to_their_theme() {
		assert_eq!(by_name("dark"), by_name("slate"));
		assert_eq!(by_name(" Light "), by_name("day"));
		assert!(by_name("neon").is_none());
	}

	#[test]
	fn names_lists_canonical_names_only() {
		assert_eq!(names(), vec!["light", "slate", "solarized"]);
	}
}

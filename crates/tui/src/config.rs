use docsift_search_api::Category;

/// Human-readable text rendered around the overlay.
#[derive(Debug, Clone)]
pub struct OverlayLabels {
	/// Label rendered before the query input.
	pub prompt: String,
	/// Placeholder text displayed while the input is empty.
	pub placeholder: String,
	/// Title of the overlay frame.
	pub title: String,
	/// Shown when a resolved cycle has no hits.
	pub no_results: String,
	/// Shown while a cycle is slower than the loading delay.
	pub loading: String,
	/// Hint appended to failure messages.
	pub retry_hint: String,
	tabs: Vec<(Category, String)>,
}

impl Default for OverlayLabels {
	fn default() -> Self {
		Self {
			prompt: "Search".to_string(),
			placeholder: "Search docs".to_string(),
			title: "docsift".to_string(),
			no_results: "No results".to_string(),
			loading: "Loading…".to_string(),
			retry_hint: "Ctrl+R to retry".to_string(),
			tabs: Category::ALL
				.into_iter()
				.map(|category| (category, category.label().to_string()))
				.collect(),
		}
	}
}

impl OverlayLabels {
	#[must_use]
	pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.prompt = prompt.into();
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	/// Tabs in display order.
	#[must_use]
	pub fn tabs(&self) -> &[(Category, String)] {
		&self.tabs
	}

	/// Position of `category` among the tabs.
	#[must_use]
	pub fn tab_index(&self, category: Category) -> usize {
		self.tabs
			.iter()
			.position(|(tab, _)| *tab == category)
			.unwrap_or(0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tabs_follow_category_order() {
		let labels = OverlayLabels::default();
		let names: Vec<&str> = labels.tabs().iter().map(|(_, label)| label.as_str()).collect();
		assert_eq!(names.len(), Category::ALL.len());
		assert_eq!(labels.tab_index(Category::All), 0);
		assert_eq!(labels.tab_index(Category::Symbols), 3);
	}
}

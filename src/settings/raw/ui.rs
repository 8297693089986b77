use std::str::FromStr;
use std::time::Duration;

use docsift::ui::DEFAULT_LOADING_DELAY;
use docsift_search_api::{Category, KindFilters, QueryState, SymbolKind};
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources, DEFAULT_THEME};
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) start_category: Option<String>,
	/// Counted from 1, like `--page`.
	pub(super) start_page: Option<u32>,
	pub(super) loading_delay_ms: Option<u64>,
	pub(super) kinds: Option<Vec<String>>,
}

pub(super) struct UiResolution {
	pub(super) theme: String,
	pub(super) query: QueryState,
	pub(super) loading_delay: Duration,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(category) = cli.category {
			self.start_category = Some(category.as_str().to_string());
		}
		if let Some(page) = cli.page {
			self.start_page = Some(page);
		}
		if let Some(kinds) = &cli.kinds {
			self.kinds = Some(kinds.clone());
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(delay) = cli.loading_delay_ms {
			self.loading_delay_ms = Some(delay);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let category = match self.start_category {
			Some(raw) => Category::from_str(raw.trim()).map_err(|err| {
				ConfigError::invalid(
					"ui.start_category",
					raw.clone(),
					sources.source_for_start_category(),
					err.to_string(),
				)
			})?,
			None => Category::default(),
		};

		let page = match self.start_page {
			Some(0) => {
				return Err(ConfigError::invalid(
					"ui.start_page",
					"0",
					sources.source_for_start_page(),
					"pages are counted from 1",
				));
			}
			Some(page) => page - 1,
			None => 0,
		};

		let kinds = match self.kinds {
			Some(names) => parse_kinds(&names, sources)?,
			None => KindFilters::all(),
		};

		let query = QueryState::new()
			.with_text(self.initial_query.unwrap_or_default())
			.with_category(category)
			.with_kinds(kinds)
			.with_page(page);

		let theme = self
			.theme
			.map(|name| name.trim().to_string())
			.filter(|name| !name.is_empty())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());

		let loading_delay = self
			.loading_delay_ms
			.map(Duration::from_millis)
			.unwrap_or(DEFAULT_LOADING_DELAY);

		Ok(UiResolution {
			theme,
			query,
			loading_delay,
		})
	}
}

fn parse_kinds(names: &[String], sources: &ConfigSources) -> Result<KindFilters, ConfigError> {
	let mut kinds = Vec::with_capacity(names.len());
	for name in names.iter().map(|name| name.trim()).filter(|name| !name.is_empty()) {
		let kind = SymbolKind::from_str(name).map_err(|err| {
			ConfigError::invalid("ui.kinds", name, sources.source_for_kinds(), err.to_string())
		})?;
		kinds.push(kind);
	}
	Ok(KindFilters::only(kinds))
}

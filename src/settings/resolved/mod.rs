use std::time::Duration;

use anyhow::{Result, ensure};
use docsift::ServiceConfig;
use docsift_search_api::{IndexNames, LinkBuilder, QueryState};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Theme used when none is configured.
pub(crate) const DEFAULT_THEME: &str = "slate";

/// Click analytics settings after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsSettings {
	pub enabled: bool,
	pub user_token: String,
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub service: ServiceConfig,
	pub indices: IndexNames,
	pub link_base: String,
	pub analytics: AnalyticsSettings,
	pub theme: String,
	pub query: QueryState,
	pub loading_delay: Duration,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Service settings for a run that talks to the search service.
	pub fn service_config(&self) -> Result<ServiceConfig> {
		ensure!(
			!self.service.app_id.is_empty(),
			"no search application id configured; set service.app_id or DOCSIFT__SERVICE__APP_ID"
		);
		ensure!(
			!self.service.api_key.is_empty(),
			"no search API key configured; set service.api_key or DOCSIFT__SERVICE__API_KEY"
		);
		Ok(self.service.clone())
	}

	#[must_use]
	pub fn links(&self) -> LinkBuilder {
		LinkBuilder::new(self.link_base.as_str())
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

use std::time::Duration;

use docsift::ServiceConfig;
use serde::Deserialize;

use super::super::resolved::AnalyticsSettings;
use crate::cli::CliArgs;

/// Token reported with click events when none is configured.
const DEFAULT_USER_TOKEN: &str = "anonymous";

/// Credentials and transport options of the search service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ServiceSection {
	pub(super) app_id: Option<String>,
	pub(super) api_key: Option<String>,
	pub(super) host: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

impl ServiceSection {
	/// Missing credentials resolve to empty strings and are rejected only
	/// when a search is actually about to run.
	pub(super) fn finalize(self) -> ServiceConfig {
		let mut config = ServiceConfig::new(
			self.app_id.unwrap_or_default().trim(),
			self.api_key.unwrap_or_default().trim(),
		);
		if let Some(host) = self.host {
			config = config.with_host(host);
		}
		if let Some(secs) = self.timeout_secs {
			config = config.with_timeout(Duration::from_secs(secs));
		}
		config
	}
}

/// Click analytics switches.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct AnalyticsSection {
	pub(super) enabled: Option<bool>,
	pub(super) user_token: Option<String>,
}

impl AnalyticsSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.no_analytics {
			self.enabled = Some(false);
		}
	}

	pub(super) fn finalize(self) -> AnalyticsSettings {
		let user_token = self
			.user_token
			.map(|token| token.trim().to_string())
			.filter(|token| !token.is_empty())
			.unwrap_or_else(|| DEFAULT_USER_TOKEN.to_string());
		AnalyticsSettings {
			enabled: self.enabled.unwrap_or(true),
			user_token,
		}
	}
}

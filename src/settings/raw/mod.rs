use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod indices;
mod service;
mod ui;

use indices::{IndicesSection, LinksSection};
use service::{AnalyticsSection, ServiceSection};
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	service: ServiceSection,
	indices: IndicesSection,
	links: LinksSection,
	analytics: AnalyticsSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.analytics.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			service_host: detect_source(
				None,
				self.service.host.is_some(),
				"DOCSIFT__SERVICE__HOST",
				"service.host",
			),
			service_timeout: detect_source(
				None,
				self.service.timeout_secs.is_some(),
				"DOCSIFT__SERVICE__TIMEOUT_SECS",
				"service.timeout_secs",
			),
			indices_manual: detect_source(
				None,
				self.indices.manual.is_some(),
				"DOCSIFT__INDICES__MANUAL",
				"indices.manual",
			),
			indices_symbols: detect_source(
				None,
				self.indices.symbols.is_some(),
				"DOCSIFT__INDICES__SYMBOLS",
				"indices.symbols",
			),
			indices_modules: detect_source(
				None,
				self.indices.modules.is_some(),
				"DOCSIFT__INDICES__MODULES",
				"indices.modules",
			),
			links_base_url: detect_source(
				None,
				self.links.base_url.is_some(),
				"DOCSIFT__LINKS__BASE_URL",
				"links.base_url",
			),
			ui_theme: detect_source(
				cli.theme.is_some().then_some("--theme"),
				self.ui.theme.is_some(),
				"DOCSIFT__UI__THEME",
				"ui.theme",
			),
			ui_start_category: detect_source(
				cli.category.is_some().then_some("--category"),
				self.ui.start_category.is_some(),
				"DOCSIFT__UI__START_CATEGORY",
				"ui.start_category",
			),
			ui_start_page: detect_source(
				cli.page.is_some().then_some("--page"),
				self.ui.start_page.is_some(),
				"DOCSIFT__UI__START_PAGE",
				"ui.start_page",
			),
			ui_kinds: detect_source(
				cli.kinds.is_some().then_some("--kinds"),
				self.ui.kinds.is_some(),
				"DOCSIFT__UI__KINDS",
				"ui.kinds",
			),
		};

		let service = self.service.finalize();
		let analytics = self.analytics.finalize();
		let indices = self.indices.finalize();
		let link_base = self.links.finalize();
		let ui = self.ui.finalize(&sources).map_err(Error::new)?;

		let config = ResolvedConfig {
			service,
			indices,
			link_base,
			analytics,
			theme: ui.theme,
			query: ui.query,
			loading_delay: ui.loading_delay,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

/// Work out where a present value came from. `cli_flag` is set when the
/// corresponding command line flag was passed.
fn detect_source(
	cli_flag: Option<&'static str>,
	value_present: bool,
	env_var: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if let Some(flag) = cli_flag {
		return Some(SettingSource::CliFlag(flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

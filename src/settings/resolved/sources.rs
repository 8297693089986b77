use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origin of each value that validation may reject. `None` means the
/// built-in default was used.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) service_host: Option<SettingSource>,
	pub(crate) service_timeout: Option<SettingSource>,
	pub(crate) indices_manual: Option<SettingSource>,
	pub(crate) indices_symbols: Option<SettingSource>,
	pub(crate) indices_modules: Option<SettingSource>,
	pub(crate) links_base_url: Option<SettingSource>,
	pub(crate) ui_theme: Option<SettingSource>,
	pub(crate) ui_start_category: Option<SettingSource>,
	pub(crate) ui_start_page: Option<SettingSource>,
	pub(crate) ui_kinds: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_host(&self) -> SettingSource {
		or_key(&self.service_host, "service.host")
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		or_key(&self.service_timeout, "service.timeout_secs")
	}

	pub(crate) fn source_for_index(&self, key: &'static str) -> SettingSource {
		let source = match key {
			"indices.manual" => &self.indices_manual,
			"indices.symbols" => &self.indices_symbols,
			_ => &self.indices_modules,
		};
		or_key(source, key)
	}

	pub(crate) fn source_for_base_url(&self) -> SettingSource {
		or_key(&self.links_base_url, "links.base_url")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.ui_theme, "ui.theme")
	}

	pub(crate) fn source_for_start_category(&self) -> SettingSource {
		or_key(&self.ui_start_category, "ui.start_category")
	}

	pub(crate) fn source_for_start_page(&self) -> SettingSource {
		or_key(&self.ui_start_page, "ui.start_page")
	}

	pub(crate) fn source_for_kinds(&self) -> SettingSource {
		or_key(&self.ui_kinds, "ui.kinds")
	}
}

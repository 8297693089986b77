use url::Url;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	validate_indices(config, sources)?;

	validate_http_url(
		"links.base_url",
		&config.link_base,
		sources.source_for_base_url(),
	)?;

	if let Some(host) = &config.service.host {
		validate_http_url("service.host", host, sources.source_for_host())?;
	}

	if let Some(timeout) = config.service.timeout
		&& timeout.is_zero()
	{
		return Err(ConfigError::invalid(
			"service.timeout_secs",
			"0",
			sources.source_for_timeout(),
			"must be greater than zero; leave it unset for no deadline",
		));
	}

	if docsift_tui::style::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!(
				"unknown theme; expected one of {}",
				docsift_tui::style::names().join(", ")
			),
		));
	}

	Ok(())
}

fn validate_indices(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	let names = [
		("indices.manual", config.indices.manual.as_str()),
		("indices.symbols", config.indices.symbols.as_str()),
		("indices.modules", config.indices.modules.as_str()),
	];

	for (position, &(key, name)) in names.iter().enumerate() {
		if name.trim().is_empty() {
			return Err(ConfigError::invalid(
				key,
				name,
				sources.source_for_index(key),
				"index name must not be empty",
			));
		}
		if let Some((other, _)) = names[..position].iter().find(|(_, earlier)| *earlier == name) {
			return Err(ConfigError::invalid(
				key,
				name,
				sources.source_for_index(key),
				format!("already used by {other}"),
			));
		}
	}

	Ok(())
}

fn validate_http_url(key: &'static str, value: &str, origin: SettingSource) -> Result<(), ConfigError> {
	let url = Url::parse(value)
		.map_err(|err| ConfigError::invalid(key, value, origin.clone(), err.to_string()))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(ConfigError::invalid(
			key,
			value,
			origin,
			"only http and https URLs are supported",
		));
	}
	Ok(())
}

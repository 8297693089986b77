//! Resolve configuration, data, and log directories for `docsift`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "docsift";

const CONFIG_DIR_ENV: &str = "DOCSIFT_CONFIG_DIR";
const DATA_DIR_ENV: &str = "DOCSIFT_DATA_DIR";
const LOG_DIR_ENV: &str = "DOCSIFT_LOG_DIR";

/// Return the platform-specific directory layout for the application.
fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for docsift"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the configuration directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the data directory that stores the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Return the directory the log file is written to, defaulting to the data directory.
pub fn get_log_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(LOG_DIR_ENV) {
		return Ok(dir);
	}

	get_data_dir()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unset_or_empty_override_is_ignored() {
		assert_eq!(dir_from_env("DOCSIFT_TEST_UNSET_DIR_OVERRIDE"), None);
	}

	#[test]
	fn project_dirs_end_with_application_name() {
		if env::var_os(CONFIG_DIR_ENV).is_some() {
			return;
		}
		if let Ok(dir) = get_config_dir() {
			assert!(dir.to_string_lossy().contains(APPLICATION));
		}
	}
}

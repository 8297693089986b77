use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;
	use docsift_search_api::{Category, SymbolKind};
	use tempfile::NamedTempFile;

	use super::*;

	fn config_file(contents: &str) -> NamedTempFile {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp file");
		file.write_all(contents.as_bytes()).expect("write config");
		file
	}

	#[test]
	fn explicit_file_and_cli_flags_are_layered() {
		let file = config_file(
			r#"
[service]
app_id = "APP1"
api_key = "secret-key"

[indices]
symbols = "symbols_v2"

[links]
base_url = "https://docs.example.com/"

[ui]
theme = "light"
start_category = "manual"
loading_delay_ms = 250
"#,
		);
		let path = file.path().to_string_lossy().to_string();
		let cli = CliArgs::parse_from([
			"docsift",
			"--no-config",
			"--config",
			path.as_str(),
			"--category",
			"symbols",
			"--kinds",
			"function",
			"fetch",
		]);

		let resolved = load(&cli).expect("configuration loads");
		assert_eq!(resolved.service.app_id, "APP1");
		assert_eq!(resolved.indices.symbols, "symbols_v2");
		assert_eq!(resolved.indices.manual, "manual");
		assert_eq!(resolved.link_base, "https://docs.example.com/");
		assert_eq!(resolved.theme, "light");
		assert_eq!(resolved.loading_delay.as_millis(), 250);
		assert_eq!(resolved.query.text(), "fetch");
		assert_eq!(resolved.query.category(), Category::Symbols);
		assert!(resolved.query.kinds().is_checked(SymbolKind::Function));
		assert!(!resolved.query.kinds().is_checked(SymbolKind::Class));
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let cli = CliArgs::parse_from([
			"docsift",
			"--no-config",
			"--config",
			"/nonexistent/docsift-missing.toml",
		]);
		assert!(load(&cli).is_err());
	}

	#[test]
	fn unknown_kind_in_file_names_its_origin() {
		let file = config_file("[ui]\nkinds = [\"function\", \"macro\"]\n");
		let path = file.path().to_string_lossy().to_string();
		let cli = CliArgs::parse_from(["docsift", "--no-config", "--config", path.as_str()]);
		let message = load(&cli).expect_err("unknown kind").to_string();
		assert!(message.contains("ui.kinds"), "{message}");
		assert!(message.contains("macro"), "{message}");
	}
}

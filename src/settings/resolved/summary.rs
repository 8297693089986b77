use docsift_search_api::Section;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", render_summary(config));
}

fn render_summary(config: &ResolvedConfig) -> String {
	let mut lines = vec!["Effective configuration:".to_string()];
	let service = &config.service;
	lines.push(format!("  Application id: {}", or_unset(&service.app_id)));
	lines.push(format!("  API key: {}", mask_secret(&service.api_key)));
	lines.push(format!("  Search endpoint: {}", service.base_url()));
	match service.timeout {
		Some(timeout) => lines.push(format!("  Request timeout: {}s", timeout.as_secs())),
		None => lines.push("  Request timeout: none".to_string()),
	}
	for section in Section::ORDER {
		lines.push(format!(
			"  {} index: {}",
			section.label(),
			config.indices.name(section)
		));
	}
	lines.push(format!("  Link base: {}", config.link_base));
	lines.push(format!(
		"  Click analytics: {}",
		bool_to_word(config.analytics.enabled)
	));
	if config.analytics.enabled {
		lines.push(format!("  Analytics user: {}", config.analytics.user_token));
	}
	lines.push(format!("  UI theme: {}", config.theme));
	lines.push(format!("  Start category: {}", config.query.category().label()));
	lines.push(format!("  Start page: {}", config.query.page().saturating_add(1)));
	let kinds: Vec<&str> = config
		.query
		.kinds()
		.checked()
		.map(|kind| kind.label())
		.collect();
	if kinds.is_empty() {
		lines.push("  Symbol kinds: (any)".to_string());
	} else {
		lines.push(format!("  Symbol kinds: {}", kinds.join(", ")));
	}
	lines.push(format!(
		"  Loading delay: {}ms",
		config.loading_delay.as_millis()
	));
	if !config.query.text().is_empty() {
		lines.push(format!("  Initial query: {}", config.query.text()));
	}

	let mut out = lines.join("\n");
	out.push('\n');
	out
}

fn or_unset(value: &str) -> &str {
	if value.is_empty() { "(unset)" } else { value }
}

/// Keep only the last four characters of a secret.
fn mask_secret(secret: &str) -> String {
	let count = secret.chars().count();
	if count == 0 {
		return "(unset)".to_string();
	}
	if count <= 4 {
		return "*".repeat(count);
	}
	let tail: String = secret.chars().skip(count - 4).collect();
	format!("{}{tail}", "*".repeat(count - 4))
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

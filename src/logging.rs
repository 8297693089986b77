//! File-backed tracing setup.
//!
//! The terminal belongs to the overlay while it runs, so events are written to
//! `docsift.log` in the log directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::app_dirs;

/// Environment variable holding an `EnvFilter` directive.
pub const FILTER_ENV: &str = "DOCSIFT_LOG";

const LOG_FILE: &str = "docsift.log";

/// Default filter directive for the given verbosity.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
	if verbose { "docsift=debug,docsift_search_api=debug,warn" } else { "docsift=info,warn" }
}

fn filter(verbose: bool) -> EnvFilter {
	EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber, returning the log file path on success.
///
/// Any failure leaves logging disabled; the application keeps running.
pub fn initialize(verbose: bool) -> Option<PathBuf> {
	let log_dir = app_dirs::get_log_dir().ok()?;
	fs::create_dir_all(&log_dir).ok()?;
	let log_path = log_dir.join(LOG_FILE);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&log_path)
		.ok()?;

	let file_layer = tracing_subscriber::fmt::layer()
		.with_writer(file)
		.with_ansi(false)
		.with_target(true);

	tracing_subscriber::registry()
		.with(filter(verbose))
		.with(file_layer)
		.try_init()
		.ok()?;

	tracing::info!(path = ?log_path, version = env!("CARGO_PKG_VERSION"), "tracing initialized");
	Some(log_path)
}

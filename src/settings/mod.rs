//! Configuration loading and resolution utilities.
//!
//! Values are layered from the default config files, explicit `--config`
//! files, `DOCSIFT__SECTION__KEY` environment variables and finally command
//! line flags. `load` is the primary entry point and returns a
//! [`ResolvedConfig`] that is used by the application.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;

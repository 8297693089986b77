//! Terminal widgets for the docsift search overlay.
//!
//! This crate holds the reusable pieces the application composes into its
//! overlay: the query input, the bundled themes, match highlighting and the
//! render components for tabs, kind filters, grouped results, pagination and
//! status messages. It owns no application state.

pub mod components;
mod config;
/// Query match highlighting.
pub mod highlight;
pub mod input;
pub mod style;

pub use config::OverlayLabels;

pub use crate::input::QueryInput;
pub use crate::style::{Theme, ThemeRegistration, builtin_themes, default_theme};

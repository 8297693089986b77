//! Visual styling utilities.
//!
//! Themes are colour schemes for the overlay, bundled as TOML definitions and
//! parsed once on first use.

pub mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};

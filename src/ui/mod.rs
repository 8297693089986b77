//! Interactive search overlay for `docsift`.
//!
//! The [`builder`] module exposes the public-facing [`SearchOverlay`]
//! builder. The remaining submodules implement the overlay lifecycle, key
//! handling, rendering and the event loop on top of the widgets from
//! `docsift-tui`.

mod actions;
mod builder;
mod document;
mod lifecycle;
mod outcome;
mod render;
mod runtime;
mod state;

pub use builder::SearchOverlay;
pub use lifecycle::{Focus, Overlay, ScrollLock};
pub use outcome::{Activation, SearchOutcome};
pub use state::{App, DEFAULT_LOADING_DELAY};

//! Core crate exports for building and running the `docsift` search overlay.
//!
//! The root module re-exports the overlay builder and the HTTP seams so that
//! embedders can point the overlay at a search service without digging
//! through the module hierarchy.

pub mod app_dirs;
pub mod client;
pub mod logging;
mod systems;
pub mod ui;

pub use client::{HttpSearchClient, InsightsSink, ServiceConfig};
pub use ui::{Activation, App, SearchOutcome, SearchOverlay};

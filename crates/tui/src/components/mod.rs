//! UI building blocks for the search overlay.

/// Symbol-kind checkboxes.
pub mod filters;
/// Previous/next page controls.
pub mod pagination;
/// Grouped result list with section headers.
pub mod results;
/// List item construction and highlighting.
pub mod rows;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Loading, empty and failure messages.
pub mod status;
/// Prompt row with query input, category tabs and progress.
pub mod tabs;

pub use filters::{kind_filter_line, render_kind_filters};
pub use pagination::{PageControls, render_pagination};
pub use results::{ResultsContext, build_items, list_row, render_results};
pub use rows::hit_item;
pub use scrollbar::{ScrollMetrics, render_scrollbar};
pub use status::{StatusMessage, render_status, status_text};
pub use tabs::{ProgressState, PromptContext, render_prompt};

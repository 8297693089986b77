//! HTTP implementations of the search and click-analytics seams.

mod http;
mod insights;

pub use http::{HttpSearchClient, ServiceConfig};
pub use insights::InsightsSink;

//! Shared search types for `docsift`.
//!
//! This crate holds everything about a search overlay that does not touch a
//! terminal or a socket: the user-facing query state, the dispatcher that
//! turns it into a batch of per-index sub-queries, the normalizer that maps
//! the batched response back into a [`ResultBag`], and the link builder for
//! each kind of hit. The network client and click-analytics sink are exposed
//! as traits so the application can plug in real or fake implementations.

pub mod client;
pub mod dispatch;
pub mod error;
pub mod links;
pub mod normalize;
pub mod query;
pub mod types;

pub use client::{ClickEvent, ClickSink, NoopClickSink, SearchClient};
pub use dispatch::{
	IndexNames, IndexQuery, MANUAL_FALLBACK_QUERY, MANUAL_FILTER, QueryParams,
	SYMBOLS_FALLBACK_QUERY, build_queries, hits_per_page, symbol_filter,
};
pub use error::{SearchError, UnknownName};
pub use links::{DEFAULT_BASE_URL, LinkBuilder};
pub use normalize::{Normalized, RawIndexResponse, normalize};
pub use query::{QueryState, can_go_next, can_go_previous};
pub use types::{
	Category, HitRef, KindFilters, Location, ManualHit, ModuleHit, PagedResults, ResultBag, Section,
	SymbolHit, SymbolKind,
};

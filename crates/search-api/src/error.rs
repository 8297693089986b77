use thiserror::Error;

/// Errors reported by a [`SearchClient`](crate::SearchClient) for one batched call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
	/// The request never produced an HTTP response (DNS, TLS, connection reset, ...).
	#[error("search request failed: {message}")]
	Transport { message: String },

	/// The service answered with a non-success status code.
	#[error("search service returned status {status}: {message}")]
	Status { status: u16, message: String },

	/// The response body could not be decoded into the expected shape.
	#[error("could not decode search response: {message}")]
	Decode { message: String },
}

impl SearchError {
	/// Short, single-line description suitable for a status bar.
	#[must_use]
	pub fn summary(&self) -> String {
		match self {
			Self::Transport { .. } => "network error".to_string(),
			Self::Status { status, .. } => format!("service error ({status})"),
			Self::Decode { .. } => "unexpected response".to_string(),
		}
	}
}

/// A configured or typed name did not match any known category or symbol kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {what} '{value}'")]
pub struct UnknownName {
	pub what: &'static str,
	pub value: String,
}

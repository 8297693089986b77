use std::time::Duration;

use docsift_search_api::{IndexQuery, RawIndexResponse, SearchClient, SearchError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub(crate) const APPLICATION_ID_HEADER: &str = "X-Algolia-Application-Id";
pub(crate) const API_KEY_HEADER: &str = "X-Algolia-API-Key";
const USER_AGENT: &str = concat!("docsift/", env!("CARGO_PKG_VERSION"));

/// Credentials and transport settings for the hosted search service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
	pub app_id: String,
	/// Search-only key; never logged.
	pub api_key: String,
	/// Base URL replacing `https://{app_id}-dsn.algolia.net`.
	pub host: Option<String>,
	/// Overall deadline per call. `None` means the call may take as long as the service does.
	pub timeout: Option<Duration>,
}

impl ServiceConfig {
	#[must_use]
	pub fn new(app_id: impl Into<String>, api_key: impl Into<String>) -> Self {
		Self {
			app_id: app_id.into(),
			api_key: api_key.into(),
			host: None,
			timeout: None,
		}
	}

	#[must_use]
	pub fn with_host(mut self, host: impl Into<String>) -> Self {
		self.host = Some(host.into());
		self
	}

	#[must_use]
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	/// Base URL of the search API without a trailing slash.
	#[must_use]
	pub fn base_url(&self) -> String {
		match &self.host {
			Some(host) => host.trim_end_matches('/').to_string(),
			None => format!("https://{}-dsn.algolia.net", self.app_id.to_ascii_lowercase()),
		}
	}

	pub(crate) fn agent(&self) -> ureq::Agent {
		let mut builder = ureq::AgentBuilder::new().user_agent(USER_AGENT);
		if let Some(timeout) = self.timeout {
			builder = builder.timeout(timeout);
		}
		builder.build()
	}
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryEntry<'a> {
	index_name: &'a str,
	params: String,
}

#[derive(Serialize)]
struct MultiQueryRequest<'a> {
	requests: Vec<QueryEntry<'a>>,
}

#[derive(Deserialize)]
struct MultiQueryResponse {
	results: Vec<RawIndexResponse>,
}

#[derive(Deserialize)]
struct ServiceMessage {
	message: String,
}

/// [`SearchClient`] posting batched queries over HTTPS.
pub struct HttpSearchClient {
	agent: ureq::Agent,
	endpoint: String,
	app_id: String,
	api_key: String,
}

impl HttpSearchClient {
	#[must_use]
	pub fn new(config: &ServiceConfig) -> Self {
		Self {
			agent: config.agent(),
			endpoint: format!("{}/1/indexes/*/queries", config.base_url()),
			app_id: config.app_id.clone(),
			api_key: config.api_key.clone(),
		}
	}

	#[must_use]
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

impl SearchClient for HttpSearchClient {
	fn multiple_queries(&self, queries: &[IndexQuery]) -> Result<Vec<RawIndexResponse>, SearchError> {
		let body = request_body(queries);
		debug!(endpoint = %self.endpoint, queries = queries.len(), "posting batched search");

		let response = self
			.agent
			.post(&self.endpoint)
			.set(APPLICATION_ID_HEADER, &self.app_id)
			.set(API_KEY_HEADER, &self.api_key)
			.send_json(&body)
			.map_err(classify)?;

		let decoded: MultiQueryResponse = response.into_json().map_err(|err| SearchError::Decode {
			message: err.to_string(),
		})?;
		Ok(decoded.results)
	}
}

fn request_body(queries: &[IndexQuery]) -> MultiQueryRequest<'_> {
	MultiQueryRequest {
		requests: queries
			.iter()
			.map(|query| QueryEntry {
				index_name: &query.index_name,
				params: query.encoded_params(),
			})
			.collect(),
	}
}

/// Map a `ureq` failure onto the library's error classes.
pub(crate) fn classify(err: ureq::Error) -> SearchError {
	match err {
		ureq::Error::Status(status, response) => {
			let body = response.into_string().unwrap_or_default();
			let message = status_message(&body);
			warn!(status, %message, "search service rejected request");
			SearchError::Status { status, message }
		}
		ureq::Error::Transport(transport) => {
			warn!(error = %transport, "search request did not reach the service");
			SearchError::Transport {
				message: transport.to_string(),
			}
		}
	}
}

/// Extract the service's `message` field, falling back to the raw body.
fn status_message(body: &str) -> String {
	serde_json::from_str::<ServiceMessage>(body)
		.map(|parsed| parsed.message)
		.unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
	use docsift_search_api::QueryParams;
	use serde_json::json;

	use super::*;

	#[test]
	fn endpoint_uses_application_dsn_host() {
		let client = HttpSearchClient::new(&ServiceConfig::new("BH4D9OD16A", "key"));
		assert_eq!(
			client.endpoint(),
			"https://bh4d9od16a-dsn.algolia.net/1/indexes/*/queries"
		);

		let local = ServiceConfig::new("app", "key").with_host("http://127.0.0.1:7700/");
		assert_eq!(
			HttpSearchClient::new(&local).endpoint(),
			"http://127.0.0.1:7700/1/indexes/*/queries"
		);
	}

	#[test]
	fn request_body_lists_each_sub_query() {
		let queries = vec![IndexQuery {
			index_name: "modules".into(),
			query: "oak".into(),
			params: QueryParams {
				hits_per_page: 5,
				page: 0,
				filters: String::new(),
				click_analytics: true,
			},
		}];
		let body = serde_json::to_value(request_body(&queries)).expect("serialize");
		assert_eq!(
			body,
			json!({
				"requests": [{
					"indexName": "modules",
					"params": "query=oak&hitsPerPage=5&page=0&clickAnalytics=true",
				}]
			})
		);
	}

	#[test]
	fn response_results_decode_into_raw_responses() {
		let body = json!({
			"results": [{
				"index": "modules",
				"hits": [{"objectID": "1", "name": "oak"}],
				"page": 0,
				"hitsPerPage": 5,
				"nbPages": 3,
				"queryID": "abc",
			}]
		});
		let decoded: MultiQueryResponse = serde_json::from_value(body).expect("decode");
		assert_eq!(decoded.results.len(), 1);
		assert_eq!(decoded.results[0].nb_pages, Some(3));
		assert_eq!(decoded.results[0].query_id.as_deref(), Some("abc"));
	}

	#[test]
	fn status_message_prefers_service_text() {
		let body = r#"{"message":"Invalid Application-ID or API key","status":403}"#;
		assert_eq!(status_message(body), "Invalid Application-ID or API key");
		assert_eq!(status_message(" Bad Gateway \n"), "Bad Gateway");
	}

	#[test]
	fn status_errors_keep_code_and_message() {
		let response = ureq::Response::new(429, "Too Many Requests", r#"{"message":"slow down"}"#)
			.expect("response");
		let error = classify(ureq::Error::Status(429, response));
		assert_eq!(
			error,
			SearchError::Status {
				status: 429,
				message: "slow down".into(),
			}
		);
	}
}

use std::thread;

use docsift_search_api::{ClickEvent, ClickSink};
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::http::{API_KEY_HEADER, APPLICATION_ID_HEADER, ServiceConfig};

const INSIGHTS_ENDPOINT: &str = "https://insights.algolia.io/1/events";
const EVENT_NAME: &str = "Search Result Clicked";

/// [`ClickSink`] reporting clicks to the insights API on a detached thread.
pub struct InsightsSink {
	agent: ureq::Agent,
	app_id: String,
	api_key: String,
	user_token: String,
}

impl InsightsSink {
	#[must_use]
	pub fn new(config: &ServiceConfig, user_token: impl Into<String>) -> Self {
		Self {
			agent: config.agent(),
			app_id: config.app_id.clone(),
			api_key: config.api_key.clone(),
			user_token: user_token.into(),
		}
	}
}

impl ClickSink for InsightsSink {
	fn record(&self, event: ClickEvent) {
		let payload = click_payload(&event, &self.user_token);
		let request = self
			.agent
			.post(INSIGHTS_ENDPOINT)
			.set(APPLICATION_ID_HEADER, &self.app_id)
			.set(API_KEY_HEADER, &self.api_key);

		thread::spawn(move || match request.send_json(payload) {
			Ok(_) => debug!(index = %event.index, object_id = %event.object_id, "click recorded"),
			Err(err) => warn!(index = %event.index, error = %err, "click event was not recorded"),
		});
	}
}

/// Insights payload for one click.
///
/// Positions are only meaningful together with the query token, so a click
/// without a token is sent as a plain object click.
fn click_payload(event: &ClickEvent, user_token: &str) -> Value {
	let mut body = json!({
		"eventType": "click",
		"eventName": EVENT_NAME,
		"index": event.index,
		"userToken": user_token,
		"objectIDs": [event.object_id],
	});
	if let (Some(query_id), Some(position)) = (&event.query_id, event.position) {
		body["queryID"] = json!(query_id);
		body["positions"] = json!([position]);
	}
	json!({ "events": [body] })
}

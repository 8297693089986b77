use docsift_search_api::{Category, HitRef, LinkBuilder, Section};
use serde::Serialize;

/// A result the user opened with `Enter`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Activation {
	pub section: Section,
	pub object_id: String,
	pub title: String,
	pub href: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub excerpt: Option<String>,
}

impl Activation {
	pub(crate) fn from_hit(section: Section, hit: HitRef<'_>, links: &LinkBuilder) -> Self {
		Self {
			section,
			object_id: hit.object_id().to_string(),
			title: hit.title().to_string(),
			href: links.hit(hit),
			excerpt: hit.excerpt().map(str::to_string),
		}
	}
}

/// State handed back when the interactive session ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
	pub query: String,
	pub category: Category,
	/// The last result activated during the session, if any.
	pub activation: Option<Activation>,
}

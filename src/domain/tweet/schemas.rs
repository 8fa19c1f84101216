use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::UserSummary;

// Content is optional at the wire level so a missing field surfaces as a
// validation failure instead of a deserialization rejection.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTweet {
	pub content: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTweet {
	pub content: Option<String>,
}

/// Display-ready projection of a tweet plus social metadata. Derived on
/// every read, never persisted. Internal fields (owner id, row sequence)
/// stay out of it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
	pub content: String,
	pub owner_details: Option<UserSummary>,
	pub likes_count: i64,
	pub created_at: DateTime<Utc>,
	pub is_liked: bool,
}

#[test]
fn test_feed_entry_representation() {
	let entry = FeedEntry {
		content: "hello".to_string(),
		owner_details: Some(UserSummary {
			username: "migo".to_string(),
			avatar_url: None,
		}),
		likes_count: 3,
		created_at: Default::default(),
		is_liked: true,
	};

	let jsonified = serde_json::to_value(&entry).unwrap();
	println!("{:?}", jsonified);

	assert!(jsonified.get("likesCount").is_some());
	assert!(jsonified.get("ownerDetails").is_some());
	assert!(jsonified.get("createdAt").is_some());
	assert!(jsonified.get("isLiked").is_some());
	assert!(jsonified.get("owner_id").is_none());
}

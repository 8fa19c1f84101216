use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tweet {
    pub id: Uuid,
    pub owner_id: String,
    pub content: String,
    pub create_dt: DateTime<Utc>,
}

impl Tweet {
    /// `owner` must already be canonical; the stored `owner_id` is its
    /// hyphenated lowercase form.
    pub fn new(owner: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id: owner.to_string(),
            content,
            create_dt: Utc::now(),
        }
    }
}

// Read-only from this service's point of view. Likes are written by the
// like service; we only count them and test membership.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    pub tweet_id: Uuid,
    pub liked_by: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub username: String,
    pub avatar_url: Option<String>,
}

pub mod like_repository;
pub mod tweet_repository;
pub mod user_repository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::tweet::entity::{Like, Tweet, UserSummary};
use crate::services::response::ServiceError;

// Ports onto the backing store. The store is the arbiter of isolation;
// a single update or delete is atomic with respect to concurrent reads.

#[async_trait]
pub trait TweetRepository: Send + Sync {
	async fn add(
		&self,
		tweet: &Tweet,
	) -> Result<(), ServiceError>;

	async fn get(
		&self,
		id: Uuid,
	) -> Result<Option<Tweet>, ServiceError>;

	/// The owner's tweets in insertion order. Ordering for display is the
	/// feed assembler's job, not the store's.
	async fn list_by_owner(
		&self,
		owner: Uuid,
	) -> Result<Vec<Tweet>, ServiceError>;

	/// Returns the updated row, or `None` when the tweet no longer exists.
	async fn update_content(
		&self,
		id: Uuid,
		content: &str,
	) -> Result<Option<Tweet>, ServiceError>;

	/// Returns whether a row was actually removed.
	async fn delete(
		&self,
		id: Uuid,
	) -> Result<bool, ServiceError>;
}

#[async_trait]
pub trait LikeIndex: Send + Sync {
	async fn find_by_tweet(
		&self,
		tweet_id: Uuid,
	) -> Result<Vec<Like>, ServiceError>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
	/// All directory entries for the identifier, in the directory's natural
	/// order. Callers apply their own first-match policy.
	async fn find_by_id(
		&self,
		user_id: &str,
	) -> Result<Vec<UserSummary>, ServiceError>;
}

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::tweet::entity::Like;
use crate::services::response::ServiceError;

use super::LikeIndex;

// Read-only view onto the like service's table.
pub struct PgLikeIndex {
	pool: &'static PgPool,
}

impl PgLikeIndex {
	pub fn new(pool: &'static PgPool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl LikeIndex for PgLikeIndex {
	async fn find_by_tweet(
		&self,
		tweet_id: Uuid,
	) -> Result<Vec<Like>, ServiceError> {
		let likes = sqlx::query_as::<_, Like>("SELECT tweet_id, liked_by FROM likes WHERE tweet_id = $1")
			.bind(tweet_id)
			.fetch_all(self.pool)
			.await?;
		Ok(likes)
	}
}

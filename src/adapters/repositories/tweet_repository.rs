use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::tweet::entity::Tweet;
use crate::services::response::ServiceError;

use super::TweetRepository;

pub struct PgTweetRepository {
	pool: &'static PgPool,
}

impl PgTweetRepository {
	pub fn new(pool: &'static PgPool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl TweetRepository for PgTweetRepository {
	async fn add(
		&self,
		tweet: &Tweet,
	) -> Result<(), ServiceError> {
		sqlx::query("INSERT INTO tweets (id, owner_id, content, create_dt) VALUES ($1, $2, $3, $4)")
			.bind(tweet.id)
			.bind(&tweet.owner_id)
			.bind(&tweet.content)
			.bind(tweet.create_dt)
			.execute(self.pool)
			.await
			.map_err(|err| {
				tracing::error!("tweet insert failed : {:?}", err);
				ServiceError::PersistenceError(Box::new(err))
			})?;
		Ok(())
	}

	async fn get(
		&self,
		id: Uuid,
	) -> Result<Option<Tweet>, ServiceError> {
		let tweet = sqlx::query_as::<_, Tweet>("SELECT id, owner_id, content, create_dt FROM tweets WHERE id = $1")
			.bind(id)
			.fetch_optional(self.pool)
			.await?;
		Ok(tweet)
	}

	async fn list_by_owner(
		&self,
		owner: Uuid,
	) -> Result<Vec<Tweet>, ServiceError> {
		let tweets =
			sqlx::query_as::<_, Tweet>("SELECT id, owner_id, content, create_dt FROM tweets WHERE owner_id = $1 ORDER BY seq")
				.bind(owner.to_string())
				.fetch_all(self.pool)
				.await?;
		Ok(tweets)
	}

	async fn update_content(
		&self,
		id: Uuid,
		content: &str,
	) -> Result<Option<Tweet>, ServiceError> {
		let tweet = sqlx::query_as::<_, Tweet>(
			"UPDATE tweets SET content = $2 WHERE id = $1 RETURNING id, owner_id, content, create_dt",
		)
		.bind(id)
		.bind(content)
		.fetch_optional(self.pool)
		.await
		.map_err(|err| {
			tracing::error!("tweet update failed : {:?}", err);
			ServiceError::PersistenceError(Box::new(err))
		})?;
		Ok(tweet)
	}

	async fn delete(
		&self,
		id: Uuid,
	) -> Result<bool, ServiceError> {
		let result = sqlx::query("DELETE FROM tweets WHERE id = $1")
			.bind(id)
			.execute(self.pool)
			.await
			.map_err(|err| {
				tracing::error!("tweet delete failed : {:?}", err);
				ServiceError::PersistenceError(Box::new(err))
			})?;
		Ok(result.rows_affected() > 0)
	}
}

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::tweet::entity::UserSummary;
use crate::services::response::ServiceError;

use super::UserDirectory;

// Read-only projection of the user service's table; only the fields the
// feed displays are selected.
pub struct PgUserDirectory {
	pool: &'static PgPool,
}

impl PgUserDirectory {
	pub fn new(pool: &'static PgPool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
	async fn find_by_id(
		&self,
		user_id: &str,
	) -> Result<Vec<UserSummary>, ServiceError> {
		let users = sqlx::query_as::<_, UserSummary>("SELECT username, avatar_url FROM users WHERE id = $1")
			.bind(user_id)
			.fetch_all(self.pool)
			.await?;
		Ok(users)
	}
}

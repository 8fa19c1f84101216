use std::sync::OnceLock;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::services::response::ServiceError;

pub fn config() -> &'static Config {
	static CONFIG: OnceLock<Config> = OnceLock::new();
	let config = match CONFIG.get() {
		None => {
			let config = Config::new().unwrap();

			CONFIG.get_or_init(|| config)
		}
		Some(config) => config,
	};
	config
}

pub async fn connection_pool() -> &'static PgPool {
	static POOL: OnceLock<PgPool> = OnceLock::new();

	let p = match POOL.get() {
		None => {
			let url: &String = &config().database_url;
			let pool = PgPoolOptions::new()
				.max_connections(30)
				.connect(url)
				.await
				.map_err(|err| ServiceError::PersistenceError(Box::new(err)))
				.unwrap();
			POOL.get_or_init(|| pool)
		}
		Some(pool) => pool,
	};
	p
}

use crate::services::response::ServiceError;

pub struct Config {
	/// Which errors we want to log
	pub log_level: String,

	/// Port server is listening to
	pub server_ip_port: String,
	pub database_url: String,
	pub allow_origins: String,

	// Media host settings. Empty when the deployment does not serve uploads.
	pub media_upload_url: String,
	pub media_api_key: String,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		let log_level = std::env::var("LOG_LEVEL").unwrap_or("warn".to_string());
		let server_ip_port = std::env::var("SERVER_IP_PORT").unwrap_or("0.0.0.0:80".into());
		let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set!");
		let allow_origins = std::env::var("ALLOW_ORIGINS").unwrap_or("http://localhost:3000,http://localhost:3001".to_string());
		let media_upload_url = std::env::var("MEDIA_UPLOAD_URL").unwrap_or_default();
		let media_api_key = std::env::var("MEDIA_API_KEY").unwrap_or_default();

		Ok(Config {
			log_level,
			server_ip_port,
			database_url,
			allow_origins,
			media_upload_url,
			media_api_key,
		})
	}
}

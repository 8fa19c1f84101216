use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tweet::adapters::repositories::like_repository::PgLikeIndex;
use tweet::adapters::repositories::tweet_repository::PgTweetRepository;
use tweet::adapters::repositories::user_repository::PgUserDirectory;
use tweet::dependencies::{config, connection_pool};
use tweet::routes::tweet_routers;
use tweet::services::{ServiceState, ServiceStateWrapper};

#[tokio::main]
async fn main() {
	println!("Environment Variable Is Being Set...");
	dotenv::dotenv().ok();

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			"tracing=debug,tower_http=debug,axum::rejection=trace".into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Connection
	println!("Connections Are Being Pooled...");
	let pool = connection_pool().await;
	sqlx::migrate!().run(pool).await.expect("migration failed");

	let state: ServiceStateWrapper = ServiceState {
		tweets: Arc::new(PgTweetRepository::new(pool)),
		likes: Arc::new(PgLikeIndex::new(pool)),
		users: Arc::new(PgUserDirectory::new(pool)),
	}
	.into();

	let routers = Router::new().nest("/tweets", tweet_routers()).with_state(state);

	let service_name = "/krust-tweet";
	let app = Router::new()
		.nest_service(service_name, routers)
		.layer(
			CorsLayer::new()
				.allow_origin(config().allow_origins.parse::<HeaderValue>().unwrap())
				.allow_methods([Method::GET, Method::POST, Method::PATCH, Method::PUT, Method::DELETE]),
		)
		.layer(TraceLayer::new_for_http());

	println!("Start Web Server...");
	axum::Server::bind(&SocketAddr::from_str(&config().server_ip_port).unwrap())
		.serve(app.into_make_service())
		.await
		.unwrap();
}

mod tweets;

use axum::middleware;
use axum::routing::{get, patch, post};
use axum::Router;

use crate::common::middleware_current_user::set_middleware_current_user;
use crate::services::ServiceStateWrapper;

pub fn tweet_routers() -> Router<ServiceStateWrapper> {
	Router::new()
		.route("/", post(tweets::create_tweet))
		.route("/:tweet_id", patch(tweets::update_tweet).delete(tweets::delete_tweet))
		.route("/user/:owner_id", get(tweets::get_user_tweets))
		.layer(middleware::from_fn(set_middleware_current_user))
}

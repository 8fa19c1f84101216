use axum::extract::{Path, State};
use axum::Json;

use crate::common::middleware_current_user::CurrentUser;
use crate::domain::tweet::schemas::{CreateTweet, UpdateTweet};
use crate::services::handlers::TweetHandler;
use crate::services::response::{ServiceError, ServiceResponse};
use crate::services::ServiceStateWrapper;

#[axum_macros::debug_handler(state = ServiceStateWrapper)]
pub async fn create_tweet(
	State(state): State<ServiceStateWrapper>,
	CurrentUser(actor_id): CurrentUser,
	Json(cmd): Json<CreateTweet>,
) -> Result<Json<ServiceResponse>, ServiceError> {
	let tweet = TweetHandler::create_tweet(&actor_id, cmd, state.tweets.as_ref()).await?;
	Ok(Json(tweet.into()))
}

pub async fn update_tweet(
	State(state): State<ServiceStateWrapper>,
	CurrentUser(actor_id): CurrentUser,
	Path(tweet_id): Path<String>,
	Json(cmd): Json<UpdateTweet>,
) -> Result<Json<ServiceResponse>, ServiceError> {
	let tweet = TweetHandler::update_tweet(&actor_id, &tweet_id, cmd, state.tweets.as_ref()).await?;
	Ok(Json(tweet.into()))
}

pub async fn delete_tweet(
	State(state): State<ServiceStateWrapper>,
	CurrentUser(actor_id): CurrentUser,
	Path(tweet_id): Path<String>,
) -> Result<Json<ServiceResponse>, ServiceError> {
	TweetHandler::delete_tweet(&actor_id, &tweet_id, state.tweets.as_ref()).await?;
	Ok(Json(().into()))
}

pub async fn get_user_tweets(
	State(state): State<ServiceStateWrapper>,
	viewer: Option<CurrentUser>,
	Path(owner_id): Path<String>,
) -> Result<Json<ServiceResponse>, ServiceError> {
	let viewer_id = viewer.as_ref().map(|CurrentUser(id)| id.as_str());
	let entries = TweetHandler::get_user_tweets(
		&owner_id,
		viewer_id,
		state.tweets.as_ref(),
		state.users.as_ref(),
		state.likes.as_ref(),
	)
	.await?;
	Ok(Json(entries.into()))
}

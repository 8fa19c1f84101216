use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::tweet::entity::Tweet;
use crate::domain::tweet::schemas::FeedEntry;

pub type AnyError = dyn std::error::Error + Send + Sync;

#[derive(Debug, Serialize)]
pub enum ServiceResponse {
    Tweet(Tweet),
    Feed(Vec<FeedEntry>),
    String(String),
    Empty(()),
}

impl From<Tweet> for ServiceResponse {
    fn from(value: Tweet) -> Self {
        ServiceResponse::Tweet(value)
    }
}

impl From<Vec<FeedEntry>> for ServiceResponse {
    fn from(value: Vec<FeedEntry>) -> Self {
        ServiceResponse::Feed(value)
    }
}

impl From<String> for ServiceResponse {
    fn from(value: String) -> Self {
        ServiceResponse::String(value)
    }
}

impl From<()> for ServiceResponse {
    fn from(_value: ()) -> Self {
        ServiceResponse::Empty(())
    }
}

// Every failure aborts the operation where it happened and is reported
// upward verbatim; no retry, no recovery in this layer.
#[derive(Debug)]
pub enum ServiceError {
    ValidationError(String),
    EntityNotFound,
    OwnershipViolation,
    PersistenceError(Box<AnyError>),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::ValidationError(msg) => write!(f, "{}", msg),
            ServiceError::EntityNotFound => write!(f, "tweet not found"),
            ServiceError::OwnershipViolation => write!(f, "only the owner can edit their tweet"),
            ServiceError::PersistenceError(res) => write!(f, "{}", res),
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(value: sqlx::Error) -> Self {
        ServiceError::PersistenceError(Box::new(value))
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ServiceError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ServiceError::EntityNotFound => StatusCode::NOT_FOUND,
            ServiceError::OwnershipViolation => StatusCode::FORBIDDEN,
            ServiceError::PersistenceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({
            "success": false,
            "message": self.to_string(),
        });
        (status_code, Json(body)).into_response()
    }
}

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

/// Identity of the authenticated caller. The gateway in front of this
/// service verifies the token and forwards the subject as `x-user-id`;
/// this service never sees credentials.
#[derive(Clone)]
pub struct CurrentUser(pub String);

pub async fn set_middleware_current_user<B>(
	mut request: Request<B>,
	next: Next<B>,
) -> Response {
	let actor = request
		.headers()
		.get("x-user-id")
		.and_then(|value| value.to_str().ok())
		.map(|value| value.to_owned());

	if let Some(actor) = actor {
		request.extensions_mut().insert(CurrentUser(actor));
	}

	next.run(request).await
}

// Required on mutating routes; the feed route extracts it as an Option so
// anonymous readers go through.
#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
	S: Send + Sync,
{
	type Rejection = StatusCode;

	async fn from_request_parts(
		parts: &mut Parts,
		_state: &S,
	) -> Result<Self, Self::Rejection> {
		parts.extensions.get::<CurrentUser>().cloned().ok_or(StatusCode::UNAUTHORIZED)
	}
}

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::warn;

use super::services::SessionKeys;
use crate::error::ApiError;

/// A request carrying a valid session. Holds the operator's username.
pub struct SessionUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    SessionKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = SessionKeys::from_ref(state);
        match keys.verify_headers(&parts.headers) {
            Ok(Some(claims)) => Ok(SessionUser(claims.sub)),
            Ok(None) => Err(ApiError::Unauthorized("login required".into())),
            Err(e) => {
                warn!(error = %e, "invalid or expired session");
                Err(ApiError::Unauthorized("invalid or expired session".into()))
            }
        }
    }
}

/// Page guard: anything without a valid session is sent to the login page.
pub async fn require_page_session(
    State(keys): State<SessionKeys>,
    req: Request,
    next: Next,
) -> Response {
    let valid = matches!(keys.verify_headers(req.headers()), Ok(Some(_)));
    if !valid {
        return Redirect::to("login").into_response();
    }
    next.run(req).await
}

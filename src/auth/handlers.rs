use axum::{
    extract::{FromRef, State},
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect},
    routing::{get, get_service, post},
    Form, Json, Router,
};
use tower_http::services::ServeFile;
use tracing::{info, instrument, warn};

use super::{
    dto::{LoginForm, LoginRequest, LoginResponse},
    services::{check_credentials, cleared_session_cookie, session_cookie, SessionKeys},
};
use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

/// Login page, form sign-in and sign-out.
pub fn page_routes(login_page: ServeFile) -> Router<AppState> {
    Router::new()
        .route("/login", get_service(login_page).post(login_form))
        .route("/logout", get(logout))
}

/// JSON sign-in, mounted under the API prefix.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login_api))
}

/// Verifies the pair and signs a session. `Ok(None)` means bad credentials.
fn sign_in(state: &AppState, username: &str, password: &str) -> anyhow::Result<Option<String>> {
    if !check_credentials(&state.config.credentials, username, password)? {
        warn!(username, "login rejected");
        return Ok(None);
    }
    let keys = SessionKeys::from_ref(state);
    let (token, claims) = keys.sign(username)?;
    info!(username, session_id = %claims.jti, "operator logged in");
    Ok(Some(token))
}

#[instrument(skip(state, form))]
pub async fn login_form(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    match sign_in(&state, &form.username, &form.password) {
        Ok(Some(token)) => {
            let ttl = SessionKeys::from_ref(&state).ttl;
            (
                AppendHeaders([(SET_COOKIE, session_cookie(&token, ttl))]),
                Redirect::to("./"),
            )
                .into_response()
        }
        Ok(None) => Redirect::to("login?error=1").into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

#[instrument(skip(state, payload))]
pub async fn login_api(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let token = sign_in(&state, &payload.username, &payload.password)?
        .ok_or_else(|| ApiError::Unauthorized("invalid credentials".into()))?;

    let ttl = SessionKeys::from_ref(&state).ttl;
    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(&token, ttl))]),
        Json(LoginResponse {
            token,
            message: "logged in",
        }),
    ))
}

pub async fn logout() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, cleared_session_cookie())]),
        Redirect::to("login"),
    )
}

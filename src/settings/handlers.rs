use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use super::{
    dto::{value_to_text, SettingsUpdate},
    repo,
};
use crate::{
    auth::extractors::SessionUser, error::ApiResult, state::AppState, types::MessageResponse,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/settings", get(get_settings).post(update_settings))
}

#[instrument(skip(state))]
pub async fn get_settings(
    State(state): State<AppState>,
) -> ApiResult<Json<BTreeMap<String, String>>> {
    Ok(Json(repo::get_all(&state.db).await?))
}

#[instrument(skip(state, payload))]
pub async fn update_settings(
    State(state): State<AppState>,
    SessionUser(operator): SessionUser,
    Json(payload): Json<SettingsUpdate>,
) -> ApiResult<Json<MessageResponse>> {
    let pairs: Vec<(String, String)> = payload
        .into_iter()
        .map(|(k, v)| (k, value_to_text(v)))
        .collect();
    repo::upsert_many(&state.db, &pairs).await?;
    info!(%operator, keys = pairs.len(), "settings updated");
    Ok(Json(MessageResponse::new("settings updated")))
}

use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};

use super::{dto::WeightPayload, repo, repo::WeightRecord};
use crate::{
    error::ApiResult,
    state::AppState,
    types::{CreatedResponse, MessageResponse},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/weight", get(list_weights).post(record_weight))
        .route("/weight/:id", delete(delete_weight))
}

#[instrument(skip(state))]
pub async fn list_weights(State(state): State<AppState>) -> ApiResult<Json<Vec<WeightRecord>>> {
    Ok(Json(repo::list(&state.db).await?))
}

#[instrument(skip(state, payload))]
pub async fn record_weight(
    State(state): State<AppState>,
    Json(payload): Json<WeightPayload>,
) -> ApiResult<Json<CreatedResponse>> {
    let record = payload.validate()?;
    let id = repo::upsert(&state.db, &record).await?;
    info!(id, date = %record.date, weight = record.weight, "weight recorded");
    Ok(Json(CreatedResponse {
        id,
        message: "recorded",
    }))
}

#[instrument(skip(state))]
pub async fn delete_weight(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    repo::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("deleted")))
}

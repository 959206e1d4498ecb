use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};

use super::{dto::ExercisePayload, repo, repo::ExerciseParam};
use crate::{
    error::ApiResult,
    state::AppState,
    types::{CreatedResponse, MessageResponse},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/exercise", get(list_exercise).post(create_exercise))
        .route("/exercise/:id", put(update_exercise).delete(delete_exercise))
}

#[instrument(skip(state))]
pub async fn list_exercise(State(state): State<AppState>) -> ApiResult<Json<Vec<ExerciseParam>>> {
    Ok(Json(repo::list(&state.db).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_exercise(
    State(state): State<AppState>,
    Json(payload): Json<ExercisePayload>,
) -> ApiResult<Json<CreatedResponse>> {
    let ex = payload.validate()?;
    let id = repo::insert(&state.db, &ex).await?;
    info!(id, name = %ex.name, "exercise created");
    Ok(Json(CreatedResponse {
        id,
        message: "created",
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_exercise(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ExercisePayload>,
) -> ApiResult<Json<MessageResponse>> {
    repo::update(&state.db, id, &payload.validate()?).await?;
    Ok(Json(MessageResponse::new("updated")))
}

#[instrument(skip(state))]
pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    repo::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("deleted")))
}

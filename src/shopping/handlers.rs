use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};

use super::{dto::ShoppingPayload, repo, repo::ShoppingItem};
use crate::{
    error::ApiResult,
    state::AppState,
    types::{CreatedResponse, MessageResponse},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shopping", get(list_items).post(create_item))
        .route("/shopping/:id", put(update_item).delete(delete_item))
}

#[instrument(skip(state))]
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<ShoppingItem>>> {
    Ok(Json(repo::list(&state.db).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<ShoppingPayload>,
) -> ApiResult<Json<CreatedResponse>> {
    let item = payload.validate()?;
    let id = repo::insert(&state.db, &item).await?;
    info!(id, name = %item.name, category = %item.category, "shopping item created");
    Ok(Json(CreatedResponse {
        id,
        message: "created",
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ShoppingPayload>,
) -> ApiResult<Json<MessageResponse>> {
    repo::update(&state.db, id, &payload.validate()?).await?;
    Ok(Json(MessageResponse::new("updated")))
}

#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    repo::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("deleted")))
}

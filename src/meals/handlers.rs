use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};

use super::{dto::MealPayload, repo, repo::Meal};
use crate::{
    error::ApiResult,
    state::AppState,
    types::{CreatedResponse, MessageResponse},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals).post(create_meal))
        .route("/meals/:id", put(update_meal).delete(delete_meal))
}

#[instrument(skip(state))]
pub async fn list_meals(State(state): State<AppState>) -> ApiResult<Json<Vec<Meal>>> {
    Ok(Json(repo::list(&state.db).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_meal(
    State(state): State<AppState>,
    Json(payload): Json<MealPayload>,
) -> ApiResult<Json<CreatedResponse>> {
    let meal = payload.validate()?;
    let id = repo::insert(&state.db, &meal).await?;
    info!(id, name = %meal.name, meal_type = meal.meal_type.as_str(), "meal created");
    Ok(Json(CreatedResponse {
        id,
        message: "created",
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_meal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<MealPayload>,
) -> ApiResult<Json<MessageResponse>> {
    let meal = payload.validate()?;
    repo::update(&state.db, id, &meal).await?;
    Ok(Json(MessageResponse::new("updated")))
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    repo::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("deleted")))
}

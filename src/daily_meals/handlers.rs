use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{ClearPayload, DailyMealPayload},
    repo,
    repo::DailyMeal,
};
use crate::{
    error::{required, ApiResult},
    state::AppState,
    types::{CreatedResponse, DateQuery, MessageResponse},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/daily-meals", get(list_daily_meals).post(create_daily_meal))
        .route("/daily-meals/history", get(meal_history))
        .route("/daily-meals/clear", post(clear_daily_meals))
        .route("/daily-meals/:id", delete(delete_daily_meal))
}

#[instrument(skip(state))]
pub async fn list_daily_meals(
    State(state): State<AppState>,
    Query(q): Query<DateQuery>,
) -> ApiResult<Json<Vec<DailyMeal>>> {
    let date = required(q.date, "date")?;
    Ok(Json(repo::list_by_date(&state.db, &date).await?))
}

#[instrument(skip(state))]
pub async fn meal_history(State(state): State<AppState>) -> ApiResult<Json<Vec<DailyMeal>>> {
    Ok(Json(repo::history(&state.db).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_daily_meal(
    State(state): State<AppState>,
    Json(payload): Json<DailyMealPayload>,
) -> ApiResult<Json<CreatedResponse>> {
    let record = payload.validate()?;
    let id = repo::insert(&state.db, &record).await?;
    info!(id, date = %record.date, meal_type = record.meal_type.as_str(), "meal logged");
    Ok(Json(CreatedResponse {
        id,
        message: "recorded",
    }))
}

#[instrument(skip(state))]
pub async fn delete_daily_meal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    repo::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("deleted")))
}

#[instrument(skip(state, payload))]
pub async fn clear_daily_meals(
    State(state): State<AppState>,
    Json(payload): Json<ClearPayload>,
) -> ApiResult<Json<MessageResponse>> {
    let (date, meal_type) = payload.validate()?;
    let removed = repo::clear(&state.db, &date, meal_type).await?;
    info!(%date, meal_type = meal_type.as_str(), removed, "meal slot cleared");
    Ok(Json(MessageResponse::new("cleared")))
}

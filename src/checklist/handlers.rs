use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};

use super::{dto::ChecklistPayload, repo, repo::ChecklistEntry};
use crate::{
    error::{required, ApiResult},
    state::AppState,
    types::{CreatedResponse, DateQuery},
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/checklist", get(list_checklist).post(set_checklist_item))
}

#[instrument(skip(state))]
pub async fn list_checklist(
    State(state): State<AppState>,
    Query(q): Query<DateQuery>,
) -> ApiResult<Json<Vec<ChecklistEntry>>> {
    let date = required(q.date, "date")?;
    Ok(Json(repo::list_by_date(&state.db, &date).await?))
}

#[instrument(skip(state, payload))]
pub async fn set_checklist_item(
    State(state): State<AppState>,
    Json(payload): Json<ChecklistPayload>,
) -> ApiResult<Json<CreatedResponse>> {
    let entry = payload.validate()?;
    let id = repo::upsert(&state.db, &entry).await?;
    debug!(id, date = %entry.date, item_key = %entry.item_key, checked = entry.checked, "checklist updated");
    Ok(Json(CreatedResponse {
        id,
        message: "updated",
    }))
}

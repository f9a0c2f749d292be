use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};

use crate::{
    dto::{common::SuccessResponse, levels::ReplaceLevelsRequest},
    error::ApiError,
    services::schedule_service,
    state::SharedState,
    state::tournament::Level,
};

/// Routes managing the blind schedule.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/levels", get(list_levels).post(replace_levels))
        .route("/api/levels/add", post(append_level))
        .route("/api/levels/delete/{index}", delete(remove_level))
}

/// Return the schedule in play order.
#[utoipa::path(
    get,
    path = "/api/levels",
    tag = "levels",
    responses(
        (status = 200, description = "Current schedule", body = Vec<Level>)
    )
)]
pub async fn list_levels(State(state): State<SharedState>) -> Json<Vec<Level>> {
    Json(schedule_service::list_levels(&state).await)
}

/// Replace the whole schedule.
#[utoipa::path(
    post,
    path = "/api/levels",
    tag = "levels",
    request_body = ReplaceLevelsRequest,
    responses(
        (status = 200, description = "Schedule replaced", body = SuccessResponse)
    )
)]
pub async fn replace_levels(
    State(state): State<SharedState>,
    Json(payload): Json<ReplaceLevelsRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    schedule_service::replace_levels(&state, payload.levels).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Append one entry to the schedule.
#[utoipa::path(
    post,
    path = "/api/levels/add",
    tag = "levels",
    request_body = Level,
    responses(
        (status = 200, description = "Entry appended", body = SuccessResponse)
    )
)]
pub async fn append_level(
    State(state): State<SharedState>,
    Json(level): Json<Level>,
) -> Result<Json<SuccessResponse>, ApiError> {
    schedule_service::append_level(&state, level).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Remove the schedule entry at the given position.
#[utoipa::path(
    delete,
    path = "/api/levels/delete/{index}",
    tag = "levels",
    params(("index" = usize, Path, description = "Zero-based schedule position")),
    responses(
        (status = 200, description = "Entry removed", body = SuccessResponse),
        (status = 400, description = "Index outside the schedule")
    )
)]
pub async fn remove_level(
    State(state): State<SharedState>,
    Path(index): Path<usize>,
) -> Result<Json<SuccessResponse>, ApiError> {
    schedule_service::remove_level(&state, index).await?;
    Ok(Json(SuccessResponse::ok()))
}

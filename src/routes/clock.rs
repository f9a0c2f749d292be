use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::common::SuccessResponse,
    error::ApiError,
    services::clock_service,
    state::SharedState,
    state::tournament::TournamentState,
};

/// Routes for the client-driven tournament clock.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/state", get(get_state).post(replace_state))
        .route("/api/reset", post(reset))
}

/// Return the clock snapshot as last posted.
#[utoipa::path(
    get,
    path = "/api/state",
    tag = "clock",
    responses(
        (status = 200, description = "Current clock state", body = TournamentState)
    )
)]
pub async fn get_state(State(state): State<SharedState>) -> Json<TournamentState> {
    Json(clock_service::current_state(&state).await)
}

/// Store the clock blob posted by the page.
#[utoipa::path(
    post,
    path = "/api/state",
    tag = "clock",
    request_body = TournamentState,
    responses(
        (status = 200, description = "Clock state stored", body = SuccessResponse)
    )
)]
pub async fn replace_state(
    State(state): State<SharedState>,
    Json(clock): Json<TournamentState>,
) -> Result<Json<SuccessResponse>, ApiError> {
    clock_service::replace_state(&state, clock).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Restart the tournament from the top of the schedule.
#[utoipa::path(
    post,
    path = "/api/reset",
    tag = "clock",
    responses(
        (status = 200, description = "Tournament reset", body = SuccessResponse)
    )
)]
pub async fn reset(
    State(state): State<SharedState>,
) -> Result<Json<SuccessResponse>, ApiError> {
    clock_service::reset(&state).await?;
    Ok(Json(SuccessResponse::ok()))
}

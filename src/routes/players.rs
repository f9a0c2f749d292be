use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};

use crate::{
    dto::{common::SuccessResponse, players::AddPlayerRequest},
    error::ApiError,
    services::roster_service,
    state::SharedState,
    state::tournament::Player,
};

/// Routes managing the player roster.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/players", get(list_players))
        .route("/api/players/add", post(register_player))
        .route("/api/players/{id}", delete(remove_player))
        .route("/api/players/{id}/eliminate", put(eliminate_player))
}

/// Return the roster in registration order.
#[utoipa::path(
    get,
    path = "/api/players",
    tag = "players",
    responses(
        (status = 200, description = "Current roster", body = Vec<Player>)
    )
)]
pub async fn list_players(State(state): State<SharedState>) -> Json<Vec<Player>> {
    Json(roster_service::list_players(&state).await)
}

/// Register a player; the created record is echoed back.
#[utoipa::path(
    post,
    path = "/api/players/add",
    tag = "players",
    request_body = AddPlayerRequest,
    responses(
        (status = 200, description = "Player registered", body = Player)
    )
)]
pub async fn register_player(
    State(state): State<SharedState>,
    Json(payload): Json<AddPlayerRequest>,
) -> Result<Json<Player>, ApiError> {
    let player = roster_service::register_player(&state, payload).await?;
    Ok(Json(player))
}

/// Mark a player as eliminated.
#[utoipa::path(
    put,
    path = "/api/players/{id}/eliminate",
    tag = "players",
    params(("id" = u64, Path, description = "Player identifier")),
    responses(
        (status = 200, description = "Player eliminated", body = SuccessResponse),
        (status = 404, description = "Unknown player id")
    )
)]
pub async fn eliminate_player(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    roster_service::eliminate_player(&state, id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Remove a player from the roster. Succeeds even when the id is unknown.
#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = "players",
    params(("id" = u64, Path, description = "Player identifier")),
    responses(
        (status = 200, description = "Player removed (or was already absent)", body = SuccessResponse)
    )
)]
pub async fn remove_player(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    roster_service::remove_player(&state, id).await?;
    Ok(Json(SuccessResponse::ok()))
}

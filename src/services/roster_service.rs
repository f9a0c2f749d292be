use tracing::info;

use crate::{
    dto::players::AddPlayerRequest,
    error::ServiceError,
    state::SharedState,
    state::tournament::Player,
};

/// The roster in registration order.
pub async fn list_players(state: &SharedState) -> Vec<Player> {
    state.store().players().await
}

/// Register a player and return the stored record.
pub async fn register_player(
    state: &SharedState,
    request: AddPlayerRequest,
) -> Result<Player, ServiceError> {
    let player = state
        .store()
        .add_player(request.name, request.chips)
        .await?;
    info!(id = player.id, name = %player.name, "registered player");
    Ok(player)
}

/// Mark a player as eliminated.
pub async fn eliminate_player(state: &SharedState, id: u64) -> Result<(), ServiceError> {
    info!(id, "eliminating player");
    state.store().eliminate_player(id).await
}

/// Remove a player from the roster; removing an absent id succeeds.
pub async fn remove_player(state: &SharedState, id: u64) -> Result<(), ServiceError> {
    info!(id, "removing player");
    state.store().remove_player(id).await
}

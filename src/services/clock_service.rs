use tracing::info;

use crate::{error::ServiceError, state::SharedState, state::tournament::TournamentState};

/// The clock snapshot as last posted.
pub async fn current_state(state: &SharedState) -> TournamentState {
    state.store().clock().await
}

/// Store the clock blob posted by the page. The server does not tick;
/// whatever arrives here is the new truth.
pub async fn replace_state(
    state: &SharedState,
    clock: TournamentState,
) -> Result<(), ServiceError> {
    state.store().replace_clock(clock).await
}

/// Restart the tournament: clock to the top of level one, everyone back
/// in their seat.
pub async fn reset(state: &SharedState) -> Result<(), ServiceError> {
    info!("resetting tournament");
    state.store().reset().await
}

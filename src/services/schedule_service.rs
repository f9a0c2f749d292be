use tracing::info;

use crate::{error::ServiceError, state::SharedState, state::tournament::Level};

/// The schedule in play order.
pub async fn list_levels(state: &SharedState) -> Vec<Level> {
    state.store().levels().await
}

/// Replace the whole schedule with what the settings page posted.
pub async fn replace_levels(
    state: &SharedState,
    levels: Vec<Level>,
) -> Result<(), ServiceError> {
    info!(count = levels.len(), "replacing blind schedule");
    state.store().replace_levels(levels).await
}

/// Append one entry to the schedule.
pub async fn append_level(state: &SharedState, level: Level) -> Result<(), ServiceError> {
    info!(entry = ?level.level, "appending schedule entry");
    state.store().append_level(level).await
}

/// Remove the schedule entry at `index`.
pub async fn remove_level(state: &SharedState, index: usize) -> Result<(), ServiceError> {
    info!(index, "removing schedule entry");
    state.store().remove_level(index).await
}

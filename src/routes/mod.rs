use axum::Router;

use crate::state::SharedState;

pub mod clock;
pub mod docs;
pub mod health;
pub mod levels;
pub mod pages;
pub mod players;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = levels::router()
        .merge(players::router())
        .merge(clock::router())
        .merge(health::router());

    let pages_router = pages::router(state.config());

    api_router
        .merge(pages_router)
        .merge(docs::router())
        .with_state(state)
}

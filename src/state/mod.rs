/// Live document store and its operations.
pub mod store;
/// Domain types for the tournament document.
pub mod tournament;

use std::sync::Arc;

use crate::{config::AppConfig, state::store::TournamentStore};

/// Cheaply cloneable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state shared across request handlers.
pub struct AppState {
    config: AppConfig,
    store: TournamentStore,
}

impl AppState {
    /// Wrap the configuration and an opened store into a [`SharedState`].
    pub fn new(config: AppConfig, store: TournamentStore) -> SharedState {
        Arc::new(Self { config, store })
    }

    /// Runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Tournament document store.
    pub fn store(&self) -> &TournamentStore {
        &self.store
    }
}

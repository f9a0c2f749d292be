use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::{
    dao::{document_store::DocumentBackend, storage::StorageResult},
    error::ServiceError,
    state::tournament::{
        DEFAULT_STARTING_CHIPS, Document, Level, Player, PlayerStatus, TournamentState,
    },
};

/// Live tournament document plus its persistence backend.
///
/// The document is held in memory and written through wholesale after
/// every mutation. One lock serializes all mutate+persist pairs, so two
/// concurrent requests cannot interleave their read-modify-write cycles;
/// across requests the observable semantics stay last-write-wins at
/// document granularity.
pub struct TournamentStore {
    backend: Arc<dyn DocumentBackend>,
    document: Mutex<Document>,
}

impl TournamentStore {
    /// Open the store, loading the persisted document or falling back to
    /// `default` when the backend holds nothing yet.
    ///
    /// A present-but-unreadable document is an error: failing loud beats
    /// silently clobbering someone's tournament.
    pub async fn open(
        backend: Arc<dyn DocumentBackend>,
        default: Document,
    ) -> StorageResult<Self> {
        let document = match backend.load().await? {
            Some(document) => document,
            None => {
                info!("no persisted tournament found; starting from the default schedule");
                default
            }
        };

        Ok(Self {
            backend,
            document: Mutex::new(document),
        })
    }

    /// Run `op` against a draft of the document, persist the draft, then
    /// install it as the live document. The live document never reflects
    /// a change the backend refused.
    async fn mutate<T>(
        &self,
        op: impl FnOnce(&mut Document) -> Result<T, ServiceError>,
    ) -> Result<T, ServiceError> {
        let mut guard = self.document.lock().await;
        let mut draft = guard.clone();
        let value = op(&mut draft)?;
        self.backend.save(draft.clone()).await?;
        *guard = draft;
        Ok(value)
    }

    /// Ordered blind schedule.
    pub async fn levels(&self) -> Vec<Level> {
        self.document.lock().await.levels.clone()
    }

    /// Wholesale schedule replacement. No per-item checks, matching the
    /// settings page contract.
    pub async fn replace_levels(&self, levels: Vec<Level>) -> Result<(), ServiceError> {
        self.mutate(|document| {
            document.levels = levels;
            Ok(())
        })
        .await
    }

    /// Append one entry to the end of the schedule.
    pub async fn append_level(&self, level: Level) -> Result<(), ServiceError> {
        self.mutate(|document| {
            document.levels.push(level);
            Ok(())
        })
        .await
    }

    /// Remove the schedule entry at `index`, erroring outside `[0, len)`.
    pub async fn remove_level(&self, index: usize) -> Result<(), ServiceError> {
        self.mutate(|document| {
            if index >= document.levels.len() {
                return Err(ServiceError::InvalidIndex {
                    index,
                    len: document.levels.len(),
                });
            }
            document.levels.remove(index);
            Ok(())
        })
        .await
    }

    /// Roster in registration order.
    pub async fn players(&self) -> Vec<Player> {
        self.document.lock().await.players.clone()
    }

    /// Register a player and return the stored record. Chips default to
    /// [`DEFAULT_STARTING_CHIPS`]; the id comes from the document's
    /// persisted counter and is never reused.
    pub async fn add_player(
        &self,
        name: String,
        chips: Option<i64>,
    ) -> Result<Player, ServiceError> {
        self.mutate(|document| {
            let player = Player {
                id: document.allocate_player_id(),
                name,
                chips: chips.unwrap_or(DEFAULT_STARTING_CHIPS),
                status: PlayerStatus::Active,
            };
            document.players.push(player.clone());
            Ok(player)
        })
        .await
    }

    /// Flip one player to eliminated, erroring when the id is unknown.
    /// Reversible only through [`TournamentStore::reset`].
    pub async fn eliminate_player(&self, id: u64) -> Result<(), ServiceError> {
        self.mutate(|document| {
            let player = document
                .players
                .iter_mut()
                .find(|player| player.id == id)
                .ok_or(ServiceError::PlayerNotFound(id))?;
            player.status = PlayerStatus::Eliminated;
            Ok(())
        })
        .await
    }

    /// Drop a player from the roster. Filter semantics: removing an
    /// absent id still succeeds.
    pub async fn remove_player(&self, id: u64) -> Result<(), ServiceError> {
        self.mutate(|document| {
            document.players.retain(|player| player.id != id);
            Ok(())
        })
        .await
    }

    /// Current clock snapshot.
    pub async fn clock(&self) -> TournamentState {
        self.document.lock().await.tournament_state.clone()
    }

    /// Store whatever clock blob the client posted. The ticking happens
    /// client-side; no cross-field consistency is enforced here.
    pub async fn replace_clock(&self, state: TournamentState) -> Result<(), ServiceError> {
        self.mutate(|document| {
            document.tournament_state = state;
            Ok(())
        })
        .await
    }

    /// Park the clock at the top of the first level and mark every player
    /// active again. Chip counts and roster membership are untouched.
    pub async fn reset(&self) -> Result<(), ServiceError> {
        self.mutate(|document| {
            document.tournament_state = TournamentState::initial(&document.levels);
            for player in &mut document.players {
                player.status = PlayerStatus::Active;
            }
            Ok(())
        })
        .await
    }

    /// Read-only copy of the whole document.
    pub async fn snapshot(&self) -> Document {
        self.document.lock().await.clone()
    }

    /// Probe the persistence backend.
    pub async fn health_check(&self) -> StorageResult<()> {
        self.backend.health_check().await
    }
}

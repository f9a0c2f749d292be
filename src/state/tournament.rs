use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Chip count handed to a player when none is supplied at registration.
pub const DEFAULT_STARTING_CHIPS: i64 = 10_000;
/// Clock value used when the schedule is empty and no level duration exists.
pub const FALLBACK_LEVEL_DURATION: u64 = 900;

/// Identifier of a schedule entry: a numbered level or a free-form label
/// such as "Pause 1". No uniqueness is enforced across the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum LevelId {
    /// Regular numbered level.
    Number(u64),
    /// Labelled entry, typically a pause marker.
    Label(String),
}

impl Default for LevelId {
    fn default() -> Self {
        LevelId::Number(0)
    }
}

/// One blind/ante schedule entry, applied for a fixed duration.
///
/// Every field carries a serde default so a partial payload appended by a
/// client is stored with the gaps filled rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Level {
    /// Level number or pause label.
    #[serde(default)]
    pub level: LevelId,
    /// Small blind.
    #[serde(default)]
    pub sb: u64,
    /// Big blind.
    #[serde(default)]
    pub bb: u64,
    /// Ante taken from every player, 0 when none.
    #[serde(default)]
    pub ante: u64,
    /// How long the level runs, in seconds.
    #[serde(default)]
    pub duration: u64,
    /// True for break entries where no hands are dealt.
    #[serde(default)]
    pub is_pause: bool,
}

/// Whether a player is still in the tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    /// Still holds chips and plays.
    Active,
    /// Busted out; stays on the roster until a reset or removal.
    Eliminated,
}

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Player {
    /// Stable identifier allocated from the document's counter.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Current chip count.
    pub chips: i64,
    /// Elimination status.
    pub status: PlayerStatus,
}

/// Mutable snapshot of the clock: which level is active and how much time
/// remains. The server stores whatever blob the client last posted; the
/// ticking happens in the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TournamentState {
    /// Index into the schedule of the level currently playing.
    pub current_level: usize,
    /// Seconds remaining in the current level.
    pub time_left: u64,
    /// Whether the clock is counting down.
    pub is_running: bool,
    /// Seconds elapsed since the tournament started.
    pub total_time: u64,
}

impl TournamentState {
    /// Clock state for a freshly started (or reset) tournament over the
    /// given schedule.
    pub fn initial(levels: &[Level]) -> Self {
        Self {
            current_level: 0,
            time_left: levels
                .first()
                .map(|level| level.duration)
                .unwrap_or(FALLBACK_LEVEL_DURATION),
            is_running: false,
            total_time: 0,
        }
    }
}

/// The full persisted state of one tournament. This struct is both the
/// in-memory model and, via serde, the on-disk JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Document {
    /// Ordered blind schedule; order defines play progression.
    pub levels: Vec<Level>,
    /// Registered players, in registration order.
    pub players: Vec<Player>,
    /// Clock snapshot.
    pub tournament_state: TournamentState,
    /// Next id to hand out when a player registers. Defaults to 0 for
    /// documents written before the counter existed; the allocator
    /// re-seeds from the roster in that case.
    #[serde(default)]
    pub next_player_id: u64,
}

impl Document {
    /// Fresh document over the given schedule: empty roster, clock parked
    /// at the top of the first level.
    pub fn with_schedule(levels: Vec<Level>) -> Self {
        let tournament_state = TournamentState::initial(&levels);
        Self {
            levels,
            players: Vec::new(),
            tournament_state,
            next_player_id: 1,
        }
    }

    /// Hand out the next player id, never reusing one.
    ///
    /// Ids are monotonically increasing for the lifetime of the document.
    /// A document loaded without a counter (or with one that lags behind
    /// the roster) re-seeds from the highest id already present.
    pub fn allocate_player_id(&mut self) -> u64 {
        let highest = self.players.iter().map(|player| player.id).max();
        let id = self
            .next_player_id
            .max(highest.map_or(1, |value| value + 1));
        self.next_player_id = id + 1;
        id
    }
}

use serde::Deserialize;
use utoipa::ToSchema;

/// Registration payload for a new player.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddPlayerRequest {
    /// Display name; an absent name registers an unnamed player.
    #[serde(default)]
    pub name: String,
    /// Starting stack, defaulting server-side when omitted.
    pub chips: Option<i64>,
}

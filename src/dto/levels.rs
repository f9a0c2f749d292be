use serde::Deserialize;
use utoipa::ToSchema;

use crate::state::tournament::Level;

/// Wholesale schedule replacement posted by the settings page.
///
/// A missing `levels` key replaces the schedule with nothing, matching
/// the page's clear-all behavior.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceLevelsRequest {
    /// The new schedule, in play order.
    #[serde(default)]
    pub levels: Vec<Level>,
}

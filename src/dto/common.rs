use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement body returned by every mutating route that has no
/// richer payload: `{"success": true}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    /// Always true; failures use the error body instead.
    pub success: bool,
}

impl SuccessResponse {
    /// The one valid value.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

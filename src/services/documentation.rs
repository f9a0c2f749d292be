use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the poker clock backend.
#[openapi(
    paths(
        crate::routes::levels::list_levels,
        crate::routes::levels::replace_levels,
        crate::routes::levels::append_level,
        crate::routes::levels::remove_level,
        crate::routes::players::list_players,
        crate::routes::players::register_player,
        crate::routes::players::eliminate_player,
        crate::routes::players::remove_player,
        crate::routes::clock::get_state,
        crate::routes::clock::replace_state,
        crate::routes::clock::reset,
        crate::routes::health::healthcheck,
    ),
    components(
        schemas(
            crate::state::tournament::Level,
            crate::state::tournament::LevelId,
            crate::state::tournament::Player,
            crate::state::tournament::PlayerStatus,
            crate::state::tournament::TournamentState,
            crate::dto::levels::ReplaceLevelsRequest,
            crate::dto::players::AddPlayerRequest,
            crate::dto::common::SuccessResponse,
            crate::dto::health::HealthResponse,
        )
    ),
    tags(
        (name = "levels", description = "Blind schedule management"),
        (name = "players", description = "Player roster management"),
        (name = "clock", description = "Tournament clock state"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

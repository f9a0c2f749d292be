use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::{config::AppConfig, state::SharedState};

/// Routes serving the tournament and settings pages plus their assets.
///
/// The markup is an external collaborator living in the configured pages
/// directory; the pages poll `/api` for their data.
pub fn router(config: &AppConfig) -> Router<SharedState> {
    let index = ServeFile::new(config.pages_dir.join("index.html"));
    let settings = ServeFile::new(config.pages_dir.join("settings.html"));
    let assets = ServeDir::new(config.pages_dir.join("static"));

    Router::new()
        .route_service("/", index)
        .route_service("/settings", settings)
        .nest_service("/static", assets)
}

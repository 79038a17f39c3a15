pub mod calc;
pub mod clock;
pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use config::CalcConfig;

/// Build the application router: JSON API plus the static calculator UI.
///
/// The UI (index.html and assets) is served from `config.static_dir` as the
/// fallback, so `GET /` renders the page and unknown paths resolve against
/// the static tree.
pub fn app(config: &CalcConfig) -> Router {
    Router::new()
        .merge(routes::api_router())
        .fallback_service(
            ServeDir::new(&config.static_dir).append_index_html_on_directories(true),
        )
        .layer(CorsLayer::permissive())
}

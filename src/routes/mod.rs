pub mod calculate;
pub mod system;

use axum::Router;

/// Assemble the API router.
pub fn api_router() -> Router {
    Router::new()
        .merge(calculate::routes())
        .merge(system::routes())
}

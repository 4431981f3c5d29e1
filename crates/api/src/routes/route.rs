//! Route definitions for the `/routes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::route;
use crate::state::AppState;

/// Routes mounted at `/routes`.
///
/// ```text
/// GET  /  -> list_routes
/// POST /  -> create_route
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(route::list_routes).post(route::create_route))
}

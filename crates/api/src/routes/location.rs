//! Route definitions for the `/locations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::location;
use crate::state::AppState;

/// Routes mounted at `/locations`.
///
/// ```text
/// GET  /  -> list_locations
/// POST /  -> create_location
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(location::list_locations).post(location::create_location))
}

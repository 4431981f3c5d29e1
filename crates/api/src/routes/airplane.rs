//! Route definitions for the `/airplanes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::airplane;
use crate::state::AppState;

/// Routes mounted at `/airplanes`.
///
/// ```text
/// GET  /  -> list_airplanes
/// POST /  -> create_airplane
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(airplane::list_airplanes).post(airplane::create_airplane))
}

//! Route definitions for the `/airplane_types` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::airplane_type;
use crate::state::AppState;

/// Routes mounted at `/airplane_types`.
///
/// ```text
/// GET  /  -> list_airplane_types
/// POST /  -> create_airplane_type
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(airplane_type::list_airplane_types).post(airplane_type::create_airplane_type))
}

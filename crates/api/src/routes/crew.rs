//! Route definitions for the `/crews` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::crew;
use crate::state::AppState;

/// Routes mounted at `/crews`.
///
/// ```text
/// GET  /  -> list_crews
/// POST /  -> create_crew
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(crew::list_crews).post(crew::create_crew))
}

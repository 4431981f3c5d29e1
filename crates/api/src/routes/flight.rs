//! Route definitions for the `/flights` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::flight;
use crate::state::AppState;

/// Routes mounted at `/flights`.
///
/// ```text
/// GET    /       -> list_flights (?depart_date=&departure=&arrival=)
/// POST   /       -> create_flight
/// GET    /{id}   -> get_flight
/// PUT    /{id}   -> update_flight
/// DELETE /{id}   -> delete_flight
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(flight::list_flights).post(flight::create_flight))
        .route(
            "/{id}",
            get(flight::get_flight)
                .put(flight::update_flight)
                .delete(flight::delete_flight),
        )
}

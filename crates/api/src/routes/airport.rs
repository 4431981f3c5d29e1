//! Route definitions for the `/airports` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::airport;
use crate::state::AppState;

/// Routes mounted at `/airports`.
///
/// ```text
/// GET  /                    -> list_airports
/// POST /                    -> create_airport
/// POST /{id}/upload-image   -> upload_airport_image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(airport::list_airports).post(airport::create_airport),
        )
        .route("/{id}/upload-image", post(airport::upload_airport_image))
}

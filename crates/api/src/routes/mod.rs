pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod auth;
pub mod crew;
pub mod flight;
pub mod health;
pub mod location;
pub mod order;
pub mod route;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                     register (public)
/// /auth/login                        login (public)
/// /auth/me                           current user (auth)
///
/// /locations                         list (auth), create (admin)
/// /airports                          list (auth), create (admin)
/// /airports/{id}/upload-image        upload image (admin, multipart)
/// /routes                            list (auth), create (admin)
/// /airplane_types                    list (auth), create (admin)
/// /airplanes                         list (auth), create (admin)
/// /crews                             list (auth), create (admin)
///
/// /flights                           search (auth), create (admin)
/// /flights/{id}                      detail (auth), update, delete (admin)
///
/// /orders                            own orders paginated, create (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/locations", location::router())
        .nest("/airports", airport::router())
        .nest("/routes", route::router())
        .nest("/airplane_types", airplane_type::router())
        .nest("/airplanes", airplane::router())
        .nest("/crews", crew::router())
        .nest("/flights", flight::router())
        .nest("/orders", order::router())
}

//! Handlers for the `/routes` resource.

use airport_core::error::CoreError;
use airport_core::fields::require_positive;
use airport_db::models::route::CreateRoute;
use airport_db::repositories::{AirportRepo, RouteRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/routes
///
/// Source and destination are shown by airport name.
pub async fn list_routes(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let routes = RouteRepo::list_with_names(&state.pool).await?;
    Ok(Json(DataResponse { data: routes }))
}

/// POST /api/v1/routes
///
/// Source and destination may be the same airport.
pub async fn create_route(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateRoute>,
) -> AppResult<impl IntoResponse> {
    require_positive("distance", input.distance)?;

    for airport_id in [input.source, input.destination] {
        if !AirportRepo::exists(&state.pool, airport_id).await? {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Airport",
                id: airport_id,
            }));
        }
    }

    let route = RouteRepo::create(&state.pool, &input).await?;

    tracing::info!(
        route_id = route.id,
        source_id = route.source_id,
        destination_id = route.destination_id,
        user_id = admin.user_id,
        "Route created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: route })))
}

//! Handlers for the `/locations` resource.

use airport_core::fields::require_name;
use airport_db::models::location::CreateLocation;
use airport_db::repositories::LocationRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/locations
pub async fn list_locations(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let locations = LocationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: locations }))
}

/// POST /api/v1/locations
pub async fn create_location(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateLocation>,
) -> AppResult<impl IntoResponse> {
    require_name("city", &input.city)?;
    require_name("country", &input.country)?;

    let location = LocationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        location_id = location.id,
        city = %location.city,
        user_id = admin.user_id,
        "Location created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: location })))
}

//! Handlers for the `/airplane_types` resource.

use airport_core::fields::require_name;
use airport_db::models::airplane_type::CreateAirplaneType;
use airport_db::repositories::AirplaneTypeRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/airplane_types
pub async fn list_airplane_types(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let types = AirplaneTypeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: types }))
}

/// POST /api/v1/airplane_types
pub async fn create_airplane_type(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAirplaneType>,
) -> AppResult<impl IntoResponse> {
    require_name("name", &input.name)?;

    let airplane_type = AirplaneTypeRepo::create(&state.pool, &input).await?;

    tracing::info!(
        airplane_type_id = airplane_type.id,
        name = %airplane_type.name,
        user_id = admin.user_id,
        "Airplane type created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: airplane_type })))
}

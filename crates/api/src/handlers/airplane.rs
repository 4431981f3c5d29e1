//! Handlers for the `/airplanes` resource.

use airport_core::booking::SeatLayout;
use airport_core::error::CoreError;
use airport_core::fields::require_name;
use airport_db::models::airplane::{AirplaneListItem, AirplaneResponse, CreateAirplane};
use airport_db::repositories::{AirplaneRepo, AirplaneTypeRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/airplanes
pub async fn list_airplanes(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let airplanes: Vec<AirplaneListItem> = AirplaneRepo::list_with_types(&state.pool)
        .await?
        .into_iter()
        .map(AirplaneListItem::from)
        .collect();
    Ok(Json(DataResponse { data: airplanes }))
}

/// POST /api/v1/airplanes
///
/// `rows` and `seats_in_row` must both be positive.
pub async fn create_airplane(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAirplane>,
) -> AppResult<impl IntoResponse> {
    require_name("name", &input.name)?;
    let layout = SeatLayout::new(input.rows, input.seats_in_row)?;

    if !AirplaneTypeRepo::exists(&state.pool, input.airplane_type).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AirplaneType",
            id: input.airplane_type,
        }));
    }

    let airplane = AirplaneRepo::create(&state.pool, &input).await?;

    tracing::info!(
        airplane_id = airplane.id,
        capacity = layout.capacity(),
        user_id = admin.user_id,
        "Airplane created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AirplaneResponse::from(airplane),
        }),
    ))
}

//! Handlers for the `/crews` resource.

use airport_core::fields::require_name;
use airport_db::models::crew::{CreateCrew, CrewResponse};
use airport_db::repositories::CrewRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/crews
pub async fn list_crews(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let crews: Vec<CrewResponse> = CrewRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(CrewResponse::from)
        .collect();
    Ok(Json(DataResponse { data: crews }))
}

/// POST /api/v1/crews
pub async fn create_crew(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCrew>,
) -> AppResult<impl IntoResponse> {
    require_name("first_name", &input.first_name)?;
    require_name("last_name", &input.last_name)?;

    let crew = CrewRepo::create(&state.pool, &input).await?;

    tracing::info!(crew_id = crew.id, user_id = admin.user_id, "Crew member created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CrewResponse::from(crew),
        }),
    ))
}

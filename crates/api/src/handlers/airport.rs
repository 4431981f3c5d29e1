//! Handlers for the `/airports` resource, including image upload.

use airport_core::error::CoreError;
use airport_core::fields::require_name;
use airport_core::images::airport_image_path;
use airport_core::types::DbId;
use airport_db::models::airport::{AirportImage, AirportListItem, CreateAirport};
use airport_db::repositories::{AirportRepo, LocationRepo};
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage::ImageStore;

/// Multipart field carrying the uploaded image.
const IMAGE_FIELD: &str = "image";

/// GET /api/v1/airports
///
/// Each airport embeds its full location.
pub async fn list_airports(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let airports: Vec<AirportListItem> = AirportRepo::list_with_locations(&state.pool)
        .await?
        .into_iter()
        .map(AirportListItem::from)
        .collect();
    Ok(Json(DataResponse { data: airports }))
}

/// POST /api/v1/airports
pub async fn create_airport(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAirport>,
) -> AppResult<impl IntoResponse> {
    require_name("name", &input.name)?;

    if !LocationRepo::exists(&state.pool, input.location).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id: input.location,
        }));
    }

    let airport = AirportRepo::create(&state.pool, &input).await?;

    tracing::info!(
        airport_id = airport.id,
        name = %airport.name,
        user_id = admin.user_id,
        "Airport created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: airport })))
}

/// POST /api/v1/airports/{id}/upload-image
///
/// Accepts a multipart form with a required `image` field. The format is
/// sniffed from the bytes; the file is stored under the media root and the
/// airport's `image` path is replaced.
pub async fn upload_airport_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(airport_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let airport = AirportRepo::find_by_id(&state.pool, airport_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Airport",
            id: airport_id,
        }))?;

    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some(IMAGE_FIELD) {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            image_data = Some(data.to_vec());
        }
    }

    let data = image_data
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("Missing required '{IMAGE_FIELD}' field")))?;

    let extension = ImageStore::detect_extension(&data)?;
    let relative_path = airport_image_path(&airport.name, extension, Uuid::new_v4());
    state.images.save(&relative_path, &data).await?;

    let updated = AirportRepo::set_image(&state.pool, airport_id, &relative_path)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Airport",
            id: airport_id,
        }))?;

    tracing::info!(
        airport_id,
        image = %relative_path,
        bytes = data.len(),
        user_id = admin.user_id,
        "Airport image uploaded",
    );

    Ok(Json(DataResponse {
        data: AirportImage {
            id: updated.id,
            image: updated.image,
        },
    }))
}

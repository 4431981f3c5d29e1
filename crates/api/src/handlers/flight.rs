//! Handlers for the `/flights` resource.
//!
//! `tickets_available` is computed at read time from the airplane layout and
//! the tickets booked so far. A negative figure means the booking invariants
//! were broken; it is reported as an internal error, never clamped.

use airport_core::booking::ensure_availability_consistent;
use airport_core::error::CoreError;
use airport_core::flight_search::FlightSearch;
use airport_core::schedule::validate_flight_times;
use airport_core::types::DbId;
use airport_db::booking;
use airport_db::models::airplane::AirplaneListItem;
use airport_db::models::crew::CrewResponse;
use airport_db::models::flight::{CreateFlight, FlightDetail, FlightListItem, FlightResponse};
use airport_db::repositories::{AirplaneRepo, CrewRepo, FlightRepo, RouteRepo, TicketRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::query::FlightSearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn flight_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Flight",
        id,
    })
}

/// Validate a create/update payload and normalise its crew list
/// (sorted, de-duplicated).
async fn prepare_flight_input(state: &AppState, input: &mut CreateFlight) -> AppResult<()> {
    validate_flight_times(input.departure_time, input.arrival_time)?;

    if !RouteRepo::exists(&state.pool, input.route).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Route",
            id: input.route,
        }));
    }
    if !AirplaneRepo::exists(&state.pool, input.airplane).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Airplane",
            id: input.airplane,
        }));
    }

    input.crew.sort_unstable();
    input.crew.dedup();
    if let Some(missing) = CrewRepo::find_missing(&state.pool, &input.crew).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Crew",
            id: missing,
        }));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/flights?depart_date=&departure=&arrival=
///
/// All filters are optional and combine with AND. `departure` and `arrival`
/// match airport names case-insensitively by substring; `depart_date` is a
/// `YYYY-MM-DD` UTC calendar day. Most recent departure first.
pub async fn list_flights(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<FlightSearchParams>,
) -> AppResult<impl IntoResponse> {
    let search = FlightSearch::parse(
        params.depart_date.as_deref(),
        params.departure.as_deref(),
        params.arrival.as_deref(),
    )?;

    let rows = FlightRepo::search(&state.pool, &search).await?;

    let flights = rows
        .into_iter()
        .map(|row| {
            ensure_availability_consistent(row.id, row.tickets_available())?;
            Ok(FlightListItem::from(row))
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    Ok(Json(DataResponse { data: flights }))
}

/// GET /api/v1/flights/{id}
///
/// Full detail: nested route, airplane and crew, the booked seats, and the
/// number of seats still free.
pub async fn get_flight(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(flight_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let flight = FlightRepo::find_by_id(&state.pool, flight_id)
        .await?
        .ok_or_else(|| flight_not_found(flight_id))?;

    let route = RouteRepo::find_with_names(&state.pool, flight.route_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Route",
            id: flight.route_id,
        }))?;

    let airplane = AirplaneRepo::find_with_type(&state.pool, flight.airplane_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Airplane",
            id: flight.airplane_id,
        }))?;

    let crew: Vec<CrewResponse> = CrewRepo::list_for_flight(&state.pool, flight_id)
        .await?
        .into_iter()
        .map(CrewResponse::from)
        .collect();

    let taken_places = TicketRepo::taken_places(&state.pool, flight_id).await?;

    let summary = FlightRepo::find_summary(&state.pool, flight_id)
        .await?
        .ok_or_else(|| flight_not_found(flight_id))?;
    let tickets_available = ensure_availability_consistent(flight_id, summary.tickets_available())?;

    Ok(Json(DataResponse {
        data: FlightDetail {
            id: flight.id,
            route,
            airplane: AirplaneListItem::from(airplane),
            crew,
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            taken_places,
            tickets_available,
        },
    }))
}

/// POST /api/v1/flights
pub async fn create_flight(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(mut input): Json<CreateFlight>,
) -> AppResult<impl IntoResponse> {
    prepare_flight_input(&state, &mut input).await?;

    let flight = FlightRepo::create(&state.pool, &input).await?;

    tracing::info!(
        flight_id = flight.id,
        route_id = flight.route_id,
        airplane_id = flight.airplane_id,
        crew_count = input.crew.len(),
        user_id = admin.user_id,
        "Flight created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: FlightResponse::new(flight, input.crew),
        }),
    ))
}

/// PUT /api/v1/flights/{id}
///
/// Full replacement, including the crew set. Refused when a booked ticket
/// would fall outside the new airplane's seat layout.
pub async fn update_flight(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(flight_id): Path<DbId>,
    Json(mut input): Json<CreateFlight>,
) -> AppResult<impl IntoResponse> {
    prepare_flight_input(&state, &mut input).await?;

    let flight = booking::update_flight(&state.pool, flight_id, &input)
        .await?
        .ok_or_else(|| flight_not_found(flight_id))?;

    tracing::info!(flight_id, user_id = admin.user_id, "Flight updated");

    Ok(Json(DataResponse {
        data: FlightResponse::new(flight, input.crew),
    }))
}

/// DELETE /api/v1/flights/{id}
///
/// Tickets booked on the flight are removed with it.
pub async fn delete_flight(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(flight_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FlightRepo::delete(&state.pool, flight_id).await?;
    if !deleted {
        return Err(flight_not_found(flight_id));
    }

    tracing::info!(flight_id, user_id = admin.user_id, "Flight deleted");

    Ok(StatusCode::NO_CONTENT)
}

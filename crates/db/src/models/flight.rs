//! Flight models, response shapes, and DTOs.
//!
//! Three response shapes exist:
//! - [`FlightResponse`] for create/update (ids for route, airplane, crew)
//! - [`FlightListItem`] for search/list (airport names + `tickets_available`)
//! - [`FlightDetail`] for retrieve (nested route, airplane, crew, taken seats)

use airport_core::booking::SeatLayout;
use airport_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::airplane::AirplaneListItem;
use crate::models::crew::CrewResponse;
use crate::models::route::RouteListItem;
use crate::models::ticket::TakenPlace;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `flights` table.
#[derive(Debug, Clone, FromRow)]
pub struct Flight {
    pub id: DbId,
    pub route_id: DbId,
    pub airplane_id: DbId,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
}

/// A flight joined with its route's airport names, its airplane layout, and
/// the number of tickets booked on it.
#[derive(Debug, Clone, FromRow)]
pub struct FlightSummaryRow {
    pub id: DbId,
    pub route_source: String,
    pub route_destination: String,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    pub rows: i32,
    pub seats_in_row: i32,
    pub tickets_booked: i64,
}

impl FlightSummaryRow {
    /// Capacity minus booked tickets. May be negative on corrupt data.
    pub fn tickets_available(&self) -> i64 {
        SeatLayout {
            rows: self.rows,
            seats_in_row: self.seats_in_row,
        }
        .tickets_available(self.tickets_booked)
    }
}

/// The airplane layout of a flight, as locked for booking.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct FlightSeatLayoutRow {
    pub flight_id: DbId,
    pub rows: i32,
    pub seats_in_row: i32,
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Create/update shape.
#[derive(Debug, Clone, Serialize)]
pub struct FlightResponse {
    pub id: DbId,
    pub route: DbId,
    pub airplane: DbId,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    pub crew: Vec<DbId>,
}

impl FlightResponse {
    pub fn new(flight: Flight, crew: Vec<DbId>) -> Self {
        Self {
            id: flight.id,
            route: flight.route_id,
            airplane: flight.airplane_id,
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            crew,
        }
    }
}

/// List shape.
#[derive(Debug, Clone, Serialize)]
pub struct FlightListItem {
    pub id: DbId,
    pub route_source: String,
    pub route_destination: String,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    pub tickets_available: i64,
}

impl From<FlightSummaryRow> for FlightListItem {
    fn from(row: FlightSummaryRow) -> Self {
        let tickets_available = row.tickets_available();
        Self {
            id: row.id,
            route_source: row.route_source,
            route_destination: row.route_destination,
            departure_time: row.departure_time,
            arrival_time: row.arrival_time,
            tickets_available,
        }
    }
}

/// Retrieve shape.
#[derive(Debug, Clone, Serialize)]
pub struct FlightDetail {
    pub id: DbId,
    pub route: RouteListItem,
    pub airplane: AirplaneListItem,
    pub crew: Vec<CrewResponse>,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    pub taken_places: Vec<TakenPlace>,
    pub tickets_available: i64,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a flight. Also used for full-replacement updates.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFlight {
    pub route: DbId,
    pub airplane: DbId,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    #[serde(default)]
    pub crew: Vec<DbId>,
}

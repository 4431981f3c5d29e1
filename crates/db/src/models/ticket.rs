//! Ticket models. Tickets are created only as part of an order.

use airport_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tickets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ticket {
    pub id: DbId,
    pub row: i32,
    pub seat: i32,
    #[serde(rename = "flight")]
    pub flight_id: DbId,
    #[serde(rename = "order")]
    pub order_id: DbId,
}

/// A booked `(row, seat)` pair, as shown on flight detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct TakenPlace {
    pub row: i32,
    pub seat: i32,
}

/// A ticket joined with the flight summary used in order listings.
#[derive(Debug, Clone, FromRow)]
pub struct TicketWithFlightRow {
    pub id: DbId,
    pub row: i32,
    pub seat: i32,
    pub order_id: DbId,
    pub flight_id: DbId,
    pub route_source: String,
    pub route_destination: String,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    pub airplane_name: String,
}

/// Flight summary embedded in an order-list ticket.
#[derive(Debug, Clone, Serialize)]
pub struct TicketFlight {
    pub id: DbId,
    pub route_source: String,
    pub route_destination: String,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    pub airplane_name: String,
}

/// Order-list ticket shape.
#[derive(Debug, Clone, Serialize)]
pub struct TicketListItem {
    pub id: DbId,
    pub row: i32,
    pub seat: i32,
    pub flight: TicketFlight,
}

impl From<TicketWithFlightRow> for TicketListItem {
    fn from(row: TicketWithFlightRow) -> Self {
        Self {
            id: row.id,
            row: row.row,
            seat: row.seat,
            flight: TicketFlight {
                id: row.flight_id,
                route_source: row.route_source,
                route_destination: row.route_destination,
                departure_time: row.departure_time,
                arrival_time: row.arrival_time,
                airplane_name: row.airplane_name,
            },
        }
    }
}

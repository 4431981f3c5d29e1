//! Repository for the `tickets` table.
//!
//! Tickets have no standalone create path: they are inserted by
//! [`crate::booking::place_order`] inside the order's transaction.

use airport_core::booking::{SeatLayout, SeatRequest, TakenSeat};
use airport_core::types::DbId;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::models::ticket::{TakenPlace, Ticket, TicketWithFlightRow};

/// Column list for `tickets` queries.
const COLUMNS: &str = "id, \"row\", seat, flight_id, order_id";

#[derive(FromRow)]
struct TakenSeatRow {
    id: DbId,
    flight_id: DbId,
    row: i32,
    seat: i32,
}

/// Provides data access for tickets.
pub struct TicketRepo;

impl TicketRepo {
    /// Seats already held on any of `flight_ids`.
    pub async fn find_taken(
        conn: &mut PgConnection,
        flight_ids: &[DbId],
    ) -> Result<Vec<TakenSeat>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TakenSeatRow>(
            "SELECT id, flight_id, \"row\", seat FROM tickets WHERE flight_id = ANY($1)",
        )
        .bind(flight_ids)
        .fetch_all(conn)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| TakenSeat {
                ticket_id: r.id,
                flight_id: r.flight_id,
                row: r.row,
                seat: r.seat,
            })
            .collect())
    }

    /// Insert one ticket for `order_id`.
    pub async fn insert(
        conn: &mut PgConnection,
        order_id: DbId,
        request: &SeatRequest,
    ) -> Result<Ticket, sqlx::Error> {
        let query = format!(
            "INSERT INTO tickets (\"row\", seat, flight_id, order_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(request.row)
            .bind(request.seat)
            .bind(request.flight)
            .bind(order_id)
            .fetch_one(conn)
            .await
    }

    /// Booked `(row, seat)` pairs on a flight, ordered by row then seat.
    pub async fn taken_places(
        pool: &PgPool,
        flight_id: DbId,
    ) -> Result<Vec<TakenPlace>, sqlx::Error> {
        sqlx::query_as::<_, TakenPlace>(
            "SELECT \"row\", seat FROM tickets WHERE flight_id = $1 ORDER BY \"row\", seat",
        )
        .bind(flight_id)
        .fetch_all(pool)
        .await
    }

    /// The lowest booked seat on a flight that lies outside `layout`, if any.
    pub async fn first_outside_layout(
        conn: &mut PgConnection,
        flight_id: DbId,
        layout: SeatLayout,
    ) -> Result<Option<TakenPlace>, sqlx::Error> {
        sqlx::query_as::<_, TakenPlace>(
            "SELECT \"row\", seat FROM tickets
             WHERE flight_id = $1 AND (\"row\" > $2 OR seat > $3)
             ORDER BY \"row\", seat
             LIMIT 1",
        )
        .bind(flight_id)
        .bind(layout.rows)
        .bind(layout.seats_in_row)
        .fetch_optional(conn)
        .await
    }

    /// Tickets of the given orders with their flight summaries, ordered by
    /// order, row, then seat.
    pub async fn list_for_orders(
        pool: &PgPool,
        order_ids: &[DbId],
    ) -> Result<Vec<TicketWithFlightRow>, sqlx::Error> {
        sqlx::query_as::<_, TicketWithFlightRow>(
            "SELECT t.id, t.\"row\", t.seat, t.order_id, f.id AS flight_id,
                    src.name AS route_source, dst.name AS route_destination,
                    f.departure_time, f.arrival_time, a.name AS airplane_name
             FROM tickets t
             JOIN flights f ON f.id = t.flight_id
             JOIN routes r ON r.id = f.route_id
             JOIN airports src ON src.id = r.source_id
             JOIN airports dst ON dst.id = r.destination_id
             JOIN airplanes a ON a.id = f.airplane_id
             WHERE t.order_id = ANY($1)
             ORDER BY t.order_id, t.\"row\", t.seat",
        )
        .bind(order_ids)
        .fetch_all(pool)
        .await
    }
}

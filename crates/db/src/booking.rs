//! Transactional writes that touch booked seats.
//!
//! An order and all of its tickets are written in a single transaction:
//!
//! 1. Lock every referenced flight row (`FOR UPDATE`, id order).
//! 2. Validate the request against the locked airplane layouts.
//! 3. Check the requested seats against tickets already committed.
//! 4. Insert the order, then each ticket.
//!
//! Any failure drops the transaction, so no partial order is ever visible.
//! The row locks serialize concurrent orders for the same flight; the
//! `uq_tickets_flight_row_seat` constraint backs this up at the storage level.
//!
//! Updating a flight takes the same row lock, so it cannot move a flight to
//! a smaller airplane while an order for it is in flight, and it refuses the
//! move when an existing ticket would no longer address a real seat.

use std::collections::HashMap;

use airport_core::booking::{
    ensure_seats_free, referenced_flights, validate_order_request, SeatLayout, SeatRequest,
};
use airport_core::error::CoreError;
use airport_core::types::DbId;
use sqlx::PgPool;

use crate::models::flight::{CreateFlight, Flight};
use crate::models::order::OrderResponse;
use crate::repositories::{AirplaneRepo, FlightRepo, OrderRepo, TicketRepo};

/// Why an order or flight update was refused.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// The request broke a booking rule (bounds, unknown flight, seat taken,
    /// booked seat missing from the new airplane).
    #[error(transparent)]
    Rejected(#[from] CoreError),

    /// The database failed or a constraint fired.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Create an order for `user_id` holding one ticket per request.
pub async fn place_order(
    pool: &PgPool,
    user_id: DbId,
    requests: &[SeatRequest],
) -> Result<OrderResponse, BookingError> {
    let flight_ids = referenced_flights(requests);

    let mut tx = pool.begin().await?;

    let layouts: HashMap<DbId, SeatLayout> = FlightRepo::lock_seat_layouts(&mut *tx, &flight_ids)
        .await?
        .into_iter()
        .map(|row| {
            (
                row.flight_id,
                SeatLayout {
                    rows: row.rows,
                    seats_in_row: row.seats_in_row,
                },
            )
        })
        .collect();

    validate_order_request(requests, &layouts)?;

    let taken = TicketRepo::find_taken(&mut *tx, &flight_ids).await?;
    ensure_seats_free(requests, &taken)?;

    let order = OrderRepo::insert(&mut *tx, user_id).await?;

    let mut tickets = Vec::with_capacity(requests.len());
    for request in requests {
        tickets.push(TicketRepo::insert(&mut *tx, order.id, request).await?);
    }

    tx.commit().await?;

    tracing::debug!(
        order_id = order.id,
        user_id,
        ticket_count = tickets.len(),
        "Order placed",
    );

    Ok(OrderResponse {
        id: order.id,
        created_at: order.created_at,
        tickets,
    })
}

/// Replace every field of a flight, including its crew set.
///
/// Returns `None` if the flight does not exist.
pub async fn update_flight(
    pool: &PgPool,
    flight_id: DbId,
    input: &CreateFlight,
) -> Result<Option<Flight>, BookingError> {
    let mut tx = pool.begin().await?;

    if !FlightRepo::lock(&mut *tx, flight_id).await? {
        return Ok(None);
    }

    let layout = AirplaneRepo::seat_layout(&mut *tx, input.airplane)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Airplane",
            id: input.airplane,
        })?;

    if let Some(place) = TicketRepo::first_outside_layout(&mut *tx, flight_id, layout).await? {
        return Err(CoreError::Validation(format!(
            "airplane {} has {} rows of {} seats, but flight {flight_id} has a ticket \
             booked at row {} seat {}",
            input.airplane, layout.rows, layout.seats_in_row, place.row, place.seat
        ))
        .into());
    }

    let flight = FlightRepo::update(&mut *tx, flight_id, input).await?;

    tx.commit().await?;
    Ok(flight)
}

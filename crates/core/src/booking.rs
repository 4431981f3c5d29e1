//! Seat layout arithmetic and ticket booking rules.
//!
//! A flight's seats are addressed by `(row, seat)`, both 1-based and bounded
//! by the airplane's `rows` and `seats_in_row`. Availability is always derived
//! from the layout and the number of tickets already booked; it is never
//! stored.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Seat layout
// ---------------------------------------------------------------------------

/// Physical seat layout of an airplane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatLayout {
    pub rows: i32,
    pub seats_in_row: i32,
}

impl SeatLayout {
    /// Build a layout, rejecting non-positive dimensions.
    pub fn new(rows: i32, seats_in_row: i32) -> Result<Self, CoreError> {
        if rows <= 0 {
            return Err(CoreError::Validation(format!(
                "rows must be greater than 0, got {rows}"
            )));
        }
        if seats_in_row <= 0 {
            return Err(CoreError::Validation(format!(
                "seats_in_row must be greater than 0, got {seats_in_row}"
            )));
        }
        Ok(Self { rows, seats_in_row })
    }

    /// Total number of seats (`rows * seats_in_row`).
    pub fn capacity(&self) -> i64 {
        i64::from(self.rows) * i64::from(self.seats_in_row)
    }

    /// Seats left after `booked` tickets.
    ///
    /// Not clamped: a negative result means more tickets exist than seats,
    /// which [`ensure_availability_consistent`] reports as an integrity error.
    pub fn tickets_available(&self, booked: i64) -> i64 {
        self.capacity() - booked
    }

    /// Check that `(row, seat)` addresses a real seat in this layout.
    pub fn check_seat(&self, row: i32, seat: i32) -> Result<(), CoreError> {
        if !(1..=self.rows).contains(&row) {
            return Err(CoreError::Validation(format!(
                "row {row} is out of range, must be between 1 and {}",
                self.rows
            )));
        }
        if !(1..=self.seats_in_row).contains(&seat) {
            return Err(CoreError::Validation(format!(
                "seat {seat} is out of range, must be between 1 and {}",
                self.seats_in_row
            )));
        }
        Ok(())
    }
}

/// Reject a negative availability figure for `flight_id`.
///
/// Under the booking invariants this cannot happen; when it does the data is
/// corrupt and the caller should surface it instead of hiding it.
pub fn ensure_availability_consistent(flight_id: DbId, available: i64) -> Result<i64, CoreError> {
    if available < 0 {
        return Err(CoreError::Internal(format!(
            "flight {flight_id} has {} more tickets than seats",
            -available
        )));
    }
    Ok(available)
}

// ---------------------------------------------------------------------------
// Order requests
// ---------------------------------------------------------------------------

/// One requested ticket inside an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatRequest {
    pub row: i32,
    pub seat: i32,
    pub flight: DbId,
}

/// A seat that is already held by an existing ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TakenSeat {
    pub ticket_id: DbId,
    pub flight_id: DbId,
    pub row: i32,
    pub seat: i32,
}

/// Distinct flight ids referenced by `requests`, in first-seen order.
pub fn referenced_flights(requests: &[SeatRequest]) -> Vec<DbId> {
    let mut seen = HashSet::new();
    requests
        .iter()
        .map(|r| r.flight)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Validate the shape of an order before anything is written.
///
/// Checks, in order: the order is non-empty, every referenced flight is known
/// (`layouts` holds the airplane layout per flight id), every seat lies inside
/// its airplane's layout, and no seat is requested twice within the order.
pub fn validate_order_request(
    requests: &[SeatRequest],
    layouts: &HashMap<DbId, SeatLayout>,
) -> Result<(), CoreError> {
    if requests.is_empty() {
        return Err(CoreError::Validation(
            "an order must contain at least one ticket".into(),
        ));
    }

    let mut requested = HashSet::with_capacity(requests.len());
    for (index, req) in requests.iter().enumerate() {
        let layout = layouts.get(&req.flight).ok_or(CoreError::NotFound {
            entity: "Flight",
            id: req.flight,
        })?;

        layout.check_seat(req.row, req.seat).map_err(|e| match e {
            CoreError::Validation(msg) => CoreError::Validation(format!(
                "ticket {index} (flight {}, row {}, seat {}): {msg}",
                req.flight, req.row, req.seat
            )),
            other => other,
        })?;

        if !requested.insert((req.flight, req.row, req.seat)) {
            return Err(CoreError::Conflict(format!(
                "ticket {index} repeats row {} seat {} on flight {} within the same order",
                req.row, req.seat, req.flight
            )));
        }
    }

    Ok(())
}

/// Fail with a conflict if any requested seat is already held.
pub fn ensure_seats_free(requests: &[SeatRequest], taken: &[TakenSeat]) -> Result<(), CoreError> {
    let held: HashMap<(DbId, i32, i32), DbId> = taken
        .iter()
        .map(|t| ((t.flight_id, t.row, t.seat), t.ticket_id))
        .collect();

    for (index, req) in requests.iter().enumerate() {
        if let Some(ticket_id) = held.get(&(req.flight, req.row, req.seat)) {
            return Err(CoreError::Conflict(format!(
                "ticket {index}: row {} seat {} on flight {} is already taken by ticket {ticket_id}",
                req.row, req.seat, req.flight
            )));
        }
    }

    Ok(())
}

//! Airplane entity model, response shapes, and DTOs.
//!
//! `capacity` is derived from `rows * seats_in_row` and never stored.

use airport_core::booking::SeatLayout;
use airport_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `airplanes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Airplane {
    pub id: DbId,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type_id: DbId,
}

impl Airplane {
    pub fn layout(&self) -> SeatLayout {
        SeatLayout {
            rows: self.rows,
            seats_in_row: self.seats_in_row,
        }
    }
}

/// An airplane joined with its type name.
#[derive(Debug, Clone, FromRow)]
pub struct AirplaneWithTypeRow {
    pub id: DbId,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type: String,
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Create/detail shape: `airplane_type` is the type id.
#[derive(Debug, Clone, Serialize)]
pub struct AirplaneResponse {
    pub id: DbId,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub capacity: i64,
    pub airplane_type: DbId,
}

impl From<Airplane> for AirplaneResponse {
    fn from(a: Airplane) -> Self {
        let capacity = a.layout().capacity();
        Self {
            id: a.id,
            name: a.name,
            rows: a.rows,
            seats_in_row: a.seats_in_row,
            capacity,
            airplane_type: a.airplane_type_id,
        }
    }
}

/// List shape: `airplane_type` is the type name.
#[derive(Debug, Clone, Serialize)]
pub struct AirplaneListItem {
    pub id: DbId,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub capacity: i64,
    pub airplane_type: String,
}

impl From<AirplaneWithTypeRow> for AirplaneListItem {
    fn from(row: AirplaneWithTypeRow) -> Self {
        Self {
            id: row.id,
            capacity: i64::from(row.rows) * i64::from(row.seats_in_row),
            name: row.name,
            rows: row.rows,
            seats_in_row: row.seats_in_row,
            airplane_type: row.airplane_type,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating an airplane.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAirplane {
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type: DbId,
}

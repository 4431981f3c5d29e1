//! Airport entity model, response shapes, and DTOs.

use airport_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::location::Location;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `airports` table.
///
/// Serialized in the create/detail shape: `location` is the location id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Airport {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "location")]
    pub location_id: DbId,
    /// Relative media path of the uploaded image, if any.
    pub image: Option<String>,
}

/// An airport joined with its location.
#[derive(Debug, Clone, FromRow)]
pub struct AirportWithLocationRow {
    pub id: DbId,
    pub name: String,
    pub image: Option<String>,
    pub location_id: DbId,
    pub city: String,
    pub country: String,
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// List shape: the location is nested in full.
#[derive(Debug, Clone, Serialize)]
pub struct AirportListItem {
    pub id: DbId,
    pub name: String,
    pub location: Location,
    pub image: Option<String>,
}

impl From<AirportWithLocationRow> for AirportListItem {
    fn from(row: AirportWithLocationRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            location: Location {
                id: row.location_id,
                city: row.city,
                country: row.country,
            },
            image: row.image,
        }
    }
}

/// Image upload response.
#[derive(Debug, Clone, Serialize)]
pub struct AirportImage {
    pub id: DbId,
    pub image: Option<String>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating an airport. `location` is an existing location id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAirport {
    pub name: String,
    pub location: DbId,
}

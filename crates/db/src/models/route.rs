//! Route entity model, response shapes, and DTOs.

use airport_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `routes` table, serialized with airport ids.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Route {
    pub id: DbId,
    #[serde(rename = "source")]
    pub source_id: DbId,
    #[serde(rename = "destination")]
    pub destination_id: DbId,
    pub distance: i32,
}

/// List shape: source and destination airports by name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RouteListItem {
    pub id: DbId,
    pub source: String,
    pub destination: String,
    pub distance: i32,
}

/// DTO for creating a route between two existing airports.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoute {
    pub source: DbId,
    pub destination: DbId,
    pub distance: i32,
}

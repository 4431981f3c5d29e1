use airport_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `airplane_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AirplaneType {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating an airplane type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAirplaneType {
    pub name: String,
}

//! Crew member model and DTOs.

use airport_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `crews` table.
#[derive(Debug, Clone, FromRow)]
pub struct Crew {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}

impl Crew {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Crew member as returned by the API, with the derived `full_name`.
#[derive(Debug, Clone, Serialize)]
pub struct CrewResponse {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

impl From<Crew> for CrewResponse {
    fn from(crew: Crew) -> Self {
        let full_name = crew.full_name();
        Self {
            id: crew.id,
            first_name: crew.first_name,
            last_name: crew.last_name,
            full_name,
        }
    }
}

/// DTO for creating a crew member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCrew {
    pub first_name: String,
    pub last_name: String,
}

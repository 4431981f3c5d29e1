//! Repository for the `crews` table and the `flight_crews` join table.

use airport_core::types::DbId;
use sqlx::PgPool;

use crate::models::crew::{CreateCrew, Crew};

/// Column list for `crews` queries.
const COLUMNS: &str = "id, first_name, last_name";

/// Provides data access for crew members.
pub struct CrewRepo;

impl CrewRepo {
    /// Insert a new crew member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCrew) -> Result<Crew, sqlx::Error> {
        let query = format!(
            "INSERT INTO crews (first_name, last_name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Crew>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(pool)
            .await
    }

    /// List all crew members ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Crew>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM crews ORDER BY id");
        sqlx::query_as::<_, Crew>(&query).fetch_all(pool).await
    }

    /// Crew assigned to `flight_id`, ordered by id.
    pub async fn list_for_flight(pool: &PgPool, flight_id: DbId) -> Result<Vec<Crew>, sqlx::Error> {
        sqlx::query_as::<_, Crew>(
            "SELECT c.id, c.first_name, c.last_name
             FROM crews c
             JOIN flight_crews fc ON fc.crew_id = c.id
             WHERE fc.flight_id = $1
             ORDER BY c.id",
        )
        .bind(flight_id)
        .fetch_all(pool)
        .await
    }

    /// Return the first id in `ids` that has no matching crew row, if any.
    pub async fn find_missing(pool: &PgPool, ids: &[DbId]) -> Result<Option<DbId>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(None);
        }
        let existing: Vec<DbId> = sqlx::query_scalar("SELECT id FROM crews WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await?;
        Ok(ids.iter().copied().find(|id| !existing.contains(id)))
    }
}

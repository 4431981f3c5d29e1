//! Repository for the `airports` table.

use airport_core::types::DbId;
use sqlx::PgPool;

use crate::models::airport::{Airport, AirportWithLocationRow, CreateAirport};

/// Column list for `airports` queries.
const COLUMNS: &str = "id, name, location_id, image";

/// Provides data access for airports.
pub struct AirportRepo;

impl AirportRepo {
    /// Insert a new airport, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAirport) -> Result<Airport, sqlx::Error> {
        let query = format!(
            "INSERT INTO airports (name, location_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Airport>(&query)
            .bind(&input.name)
            .bind(input.location)
            .fetch_one(pool)
            .await
    }

    /// List all airports with their location, ordered by id.
    pub async fn list_with_locations(
        pool: &PgPool,
    ) -> Result<Vec<AirportWithLocationRow>, sqlx::Error> {
        sqlx::query_as::<_, AirportWithLocationRow>(
            "SELECT a.id, a.name, a.image, l.id AS location_id, l.city, l.country
             FROM airports a
             JOIN locations l ON l.id = a.location_id
             ORDER BY a.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Find an airport by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Airport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airports WHERE id = $1");
        sqlx::query_as::<_, Airport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace the stored image path. Returns `None` if the airport does not exist.
    pub async fn set_image(
        pool: &PgPool,
        id: DbId,
        image: &str,
    ) -> Result<Option<Airport>, sqlx::Error> {
        let query = format!("UPDATE airports SET image = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Airport>(&query)
            .bind(id)
            .bind(image)
            .fetch_optional(pool)
            .await
    }

    /// Whether an airport with `id` exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM airports WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}

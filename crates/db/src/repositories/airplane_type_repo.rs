//! Repository for the `airplane_types` table.

use airport_core::types::DbId;
use sqlx::PgPool;

use crate::models::airplane_type::{AirplaneType, CreateAirplaneType};

/// Provides data access for airplane types.
pub struct AirplaneTypeRepo;

impl AirplaneTypeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateAirplaneType,
    ) -> Result<AirplaneType, sqlx::Error> {
        sqlx::query_as::<_, AirplaneType>(
            "INSERT INTO airplane_types (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&input.name)
        .fetch_one(pool)
        .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<AirplaneType>, sqlx::Error> {
        sqlx::query_as::<_, AirplaneType>("SELECT id, name FROM airplane_types ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM airplane_types WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}

//! Repository for the `airplanes` table.

use airport_core::booking::SeatLayout;
use airport_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::airplane::{Airplane, AirplaneWithTypeRow, CreateAirplane};

/// Column list for `airplanes` queries.
const COLUMNS: &str = "id, name, rows, seats_in_row, airplane_type_id";

/// Select list producing [`AirplaneWithTypeRow`] rows; expects `airplanes a`.
const WITH_TYPE_SELECT: &str = "\
    SELECT a.id, a.name, a.rows, a.seats_in_row, t.name AS airplane_type \
    FROM airplanes a \
    JOIN airplane_types t ON t.id = a.airplane_type_id";

/// Provides data access for airplanes.
pub struct AirplaneRepo;

impl AirplaneRepo {
    /// Insert a new airplane, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAirplane) -> Result<Airplane, sqlx::Error> {
        let query = format!(
            "INSERT INTO airplanes (name, rows, seats_in_row, airplane_type_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Airplane>(&query)
            .bind(&input.name)
            .bind(input.rows)
            .bind(input.seats_in_row)
            .bind(input.airplane_type)
            .fetch_one(pool)
            .await
    }

    /// List all airplanes with their type name, ordered by id.
    pub async fn list_with_types(pool: &PgPool) -> Result<Vec<AirplaneWithTypeRow>, sqlx::Error> {
        let query = format!("{WITH_TYPE_SELECT} ORDER BY a.id");
        sqlx::query_as::<_, AirplaneWithTypeRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find one airplane with its type name.
    pub async fn find_with_type(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AirplaneWithTypeRow>, sqlx::Error> {
        let query = format!("{WITH_TYPE_SELECT} WHERE a.id = $1");
        sqlx::query_as::<_, AirplaneWithTypeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether an airplane with `id` exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM airplanes WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Seat layout of one airplane, read on the caller's transaction.
    pub async fn seat_layout(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<SeatLayout>, sqlx::Error> {
        let row = sqlx::query_as::<_, (i32, i32)>(
            "SELECT rows, seats_in_row FROM airplanes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;
        Ok(row.map(|(rows, seats_in_row)| SeatLayout { rows, seats_in_row }))
    }
}

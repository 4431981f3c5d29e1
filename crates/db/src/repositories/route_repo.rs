//! Repository for the `routes` table.

use airport_core::types::DbId;
use sqlx::PgPool;

use crate::models::route::{CreateRoute, Route, RouteListItem};

/// Column list for `routes` queries.
const COLUMNS: &str = "id, source_id, destination_id, distance";

/// Select list producing [`RouteListItem`] rows; expects `routes r`.
const LIST_SELECT: &str = "\
    SELECT r.id, src.name AS source, dst.name AS destination, r.distance \
    FROM routes r \
    JOIN airports src ON src.id = r.source_id \
    JOIN airports dst ON dst.id = r.destination_id";

/// Provides data access for routes.
pub struct RouteRepo;

impl RouteRepo {
    /// Insert a new route, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRoute) -> Result<Route, sqlx::Error> {
        let query = format!(
            "INSERT INTO routes (source_id, destination_id, distance)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Route>(&query)
            .bind(input.source)
            .bind(input.destination)
            .bind(input.distance)
            .fetch_one(pool)
            .await
    }

    /// List all routes with airport names, ordered by id.
    pub async fn list_with_names(pool: &PgPool) -> Result<Vec<RouteListItem>, sqlx::Error> {
        let query = format!("{LIST_SELECT} ORDER BY r.id");
        sqlx::query_as::<_, RouteListItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find one route with airport names.
    pub async fn find_with_names(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RouteListItem>, sqlx::Error> {
        let query = format!("{LIST_SELECT} WHERE r.id = $1");
        sqlx::query_as::<_, RouteListItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a route with `id` exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM routes WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}

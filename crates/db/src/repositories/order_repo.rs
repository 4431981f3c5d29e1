//! Repository for the `orders` table.

use airport_core::pagination::PageRequest;
use airport_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::order::Order;

/// Column list for `orders` queries.
const COLUMNS: &str = "id, user_id, created_at";

/// Provides data access for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert an empty order owned by `user_id`.
    pub async fn insert(conn: &mut PgConnection, user_id: DbId) -> Result<Order, sqlx::Error> {
        let query = format!("INSERT INTO orders (user_id) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Order>(&query)
            .bind(user_id)
            .fetch_one(conn)
            .await
    }

    /// Total number of orders owned by `user_id`.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// One page of `user_id`'s orders, newest first.
    pub async fn list_page_for_user(
        pool: &PgPool,
        user_id: DbId,
        page: PageRequest,
    ) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM orders
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(user_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }
}

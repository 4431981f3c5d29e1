//! Order models and DTOs.

use airport_core::booking::SeatRequest;
use airport_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::ticket::{Ticket, TicketListItem};

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow)]
pub struct Order {
    pub id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// Create shape: the order with the tickets it created.
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub id: DbId,
    pub created_at: Timestamp,
    pub tickets: Vec<Ticket>,
}

/// List shape: tickets carry a flight summary.
#[derive(Debug, Clone, Serialize)]
pub struct OrderListItem {
    pub id: DbId,
    pub created_at: Timestamp,
    pub tickets: Vec<TicketListItem>,
}

/// DTO for placing an order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub tickets: Vec<SeatRequest>,
}

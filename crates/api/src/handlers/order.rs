//! Handlers for the `/orders` resource.
//!
//! Users only ever see and create their own orders.

use std::collections::HashMap;

use airport_core::pagination::{Page, PageRequest};
use airport_core::types::DbId;
use airport_db::booking::place_order;
use airport_db::models::order::{CreateOrder, OrderListItem};
use airport_db::models::ticket::TicketListItem;
use airport_db::repositories::{OrderRepo, TicketRepo};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::query::PageParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/orders?page=&page_size=
///
/// The caller's orders, newest first, each with its tickets and their
/// flight summaries.
pub async fn list_orders(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = PageRequest::new(params.page, params.page_size);

    let count = OrderRepo::count_for_user(&state.pool, user.user_id).await?;
    let orders = OrderRepo::list_page_for_user(&state.pool, user.user_id, page).await?;

    let order_ids: Vec<DbId> = orders.iter().map(|o| o.id).collect();
    let mut tickets_by_order: HashMap<DbId, Vec<TicketListItem>> = HashMap::new();
    for row in TicketRepo::list_for_orders(&state.pool, &order_ids).await? {
        tickets_by_order
            .entry(row.order_id)
            .or_default()
            .push(TicketListItem::from(row));
    }

    let results: Vec<OrderListItem> = orders
        .into_iter()
        .map(|order| OrderListItem {
            tickets: tickets_by_order.remove(&order.id).unwrap_or_default(),
            id: order.id,
            created_at: order.created_at,
        })
        .collect();

    Ok(Json(DataResponse {
        data: Page::new(page, count, results),
    }))
}

/// POST /api/v1/orders
///
/// Book every requested seat atomically: either all tickets are created or
/// none are. Out-of-range seats are a validation error, seats that are
/// already taken (or requested twice) are a conflict.
pub async fn create_order(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateOrder>,
) -> AppResult<impl IntoResponse> {
    let order = place_order(&state.pool, user.user_id, &input.tickets).await?;

    tracing::info!(
        order_id = order.id,
        user_id = user.user_id,
        ticket_count = order.tickets.len(),
        "Order created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

//! Admin order management.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use solea_core::Order;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;
use crate::store::orders;
use crate::store::orders::OrderUpdate;

/// Response for the admin order listing.
#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

/// Response for an order update.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order: Order,
    pub message: String,
}

/// `GET /api/admin/orders` - all orders, newest first.
pub async fn list(
    _auth: RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<OrdersResponse>> {
    let orders = orders::list_newest_first(state.store()).await?;
    Ok(Json(OrdersResponse { orders }))
}

/// `PUT /api/admin/orders/{id}` - update status and/or internal notes.
/// Orders are never deleted through any exposed operation.
pub async fn update(
    _auth: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<OrderUpdate>,
) -> Result<Json<OrderResponse>> {
    let order = orders::update(state.store(), &id, body)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok(Json(OrderResponse {
        order,
        message: "Order updated successfully".to_string(),
    }))
}

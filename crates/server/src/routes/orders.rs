//! Public order intake.
//!
//! Validates a submitted order, computes the derived fields (id, order
//! number, per-item subtotals), forces the `new` status, and appends it to
//! the order store. Stock levels are not touched; inventory is managed by
//! admin action only.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use solea_core::{Customer, Order, OrderItem, OrderStatus};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::orders;

/// Request body for `POST /api/orders`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer: Option<CustomerRequest>,
    #[serde(default)]
    pub items: Vec<OrderItemRequest>,
    #[serde(default)]
    pub notes: String,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub subtotal: Option<Decimal>,
    pub shipping: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub preferred_contact: Option<String>,
    #[serde(default)]
    pub newsletter: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    pub variant: Option<String>,
}

/// Response for `POST /api/orders`.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order: Order,
    pub message: String,
}

/// `POST /api/orders` - submit a new order.
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>)> {
    let order = build_order(request)?;
    orders::append(state.store(), order.clone()).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderResponse {
            order,
            message: "Order submitted successfully".to_string(),
        }),
    ))
}

/// Validate a raw order request and materialize the order record.
///
/// Rejections identify the failing field. Item subtotals are computed here,
/// once, and never recomputed afterwards.
fn build_order(request: OrderRequest) -> Result<Order> {
    let customer = request
        .customer
        .filter(|c| !c.email.is_empty() && !c.phone.is_empty())
        .ok_or_else(|| {
            AppError::Validation("Customer email and phone are required".to_string())
        })?;

    if request.items.is_empty() {
        return Err(AppError::Validation(
            "Order must contain at least one item".to_string(),
        ));
    }

    let mut items = Vec::with_capacity(request.items.len());
    for item in request.items {
        if item.quantity == 0 {
            return Err(AppError::Validation(
                "Item quantity must be at least 1".to_string(),
            ));
        }
        if item.price < Decimal::ZERO {
            return Err(AppError::Validation(
                "Item price must not be negative".to_string(),
            ));
        }
        let subtotal = item.price * Decimal::from(item.quantity);
        items.push(OrderItem {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            variant: item.variant.unwrap_or_default(),
            subtotal,
        });
    }

    let now = Utc::now();
    Ok(Order {
        id: Uuid::new_v4().to_string(),
        order_number: order_number(now.timestamp_millis()),
        customer: Customer {
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            phone: customer.phone,
            address: customer.address,
            preferred_contact: customer
                .preferred_contact
                .unwrap_or_else(|| "email".to_string()),
            newsletter: customer.newsletter,
        },
        items,
        notes: request.notes,
        subtotal: request.subtotal.unwrap_or_default(),
        shipping: request
            .shipping
            .unwrap_or_else(|| "to be confirmed".to_string()),
        total: request.total.unwrap_or_default(),
        status: OrderStatus::New,
        internal_notes: String::new(),
        created_at: now,
        updated_at: now,
    })
}

/// Timestamp-derived order number: `SOL-` plus the last eight digits of the
/// unix-millis clock. Unique enough for business purposes; collisions are
/// accepted as negligible, not eliminated.
fn order_number(timestamp_millis: i64) -> String {
    let digits = timestamp_millis.to_string();
    let tail = digits
        .len()
        .checked_sub(8)
        .and_then(|start| digits.get(start..))
        .unwrap_or(&digits);
    format!("SOL-{tail}")
}

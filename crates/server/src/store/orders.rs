//! Order store operations.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use solea_core::{Order, OrderStatus};

use super::{JsonStore, StoreError, read_document, write_document};

/// On-disk layout of `orders.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct OrdersDocument {
    pub orders: Vec<Order>,
}

/// Admin update to an order: status transition and/or internal notes.
/// Nothing else on an order is mutable after submission.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub internal_notes: Option<String>,
}

/// Load all orders, newest first.
///
/// # Errors
///
/// Returns an error if the document cannot be read or parsed.
pub async fn list_newest_first(store: &JsonStore) -> Result<Vec<Order>, StoreError> {
    let _guard = store.lock_orders().await;
    let doc: OrdersDocument = read_document(&store.orders_path()).await?;
    let mut orders = doc.orders;
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(orders)
}

/// Append a submitted order and persist the store.
///
/// The order arrives fully built (id, order number, subtotals, `new` status
/// already assigned by order intake); the store only persists it.
///
/// # Errors
///
/// Returns an error if the document cannot be read, parsed, or written.
pub async fn append(store: &JsonStore, order: Order) -> Result<(), StoreError> {
    let _guard = store.lock_orders().await;
    let path = store.orders_path();
    let mut doc: OrdersDocument = read_document(&path).await?;
    doc.orders.push(order);
    write_document(&path, &doc).await
}

/// Apply an admin update to an order and persist the store.
///
/// Returns `None` when no order has the given id.
///
/// # Errors
///
/// Returns an error if the document cannot be read, parsed, or written.
pub async fn update(
    store: &JsonStore,
    id: &str,
    update: OrderUpdate,
) -> Result<Option<Order>, StoreError> {
    let _guard = store.lock_orders().await;
    let path = store.orders_path();
    let mut doc: OrdersDocument = read_document(&path).await?;

    let Some(order) = doc.orders.iter_mut().find(|o| o.id == id) else {
        return Ok(None);
    };
    if let Some(status) = update.status {
        order.status = status;
    }
    if let Some(internal_notes) = update.internal_notes {
        order.internal_notes = internal_notes;
    }
    order.updated_at = Utc::now();
    let updated = order.clone();

    write_document(&path, &doc).await?;
    Ok(Some(updated))
}

//! Admin product CRUD.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Serialize;
use solea_core::Product;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;
use crate::store::products;
use crate::store::products::{NewProduct, ProductPatch};

/// Response for the admin product listing.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// Response for a single-product mutation.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: Product,
    pub message: String,
}

/// `GET /api/admin/products` - full catalog, hidden products included.
pub async fn list(
    _auth: RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<ProductsResponse>> {
    let products = products::list(state.store()).await?;
    Ok(Json(ProductsResponse { products }))
}

/// `POST /api/admin/products` - create a product.
pub async fn create(
    _auth: RequireAdminAuth,
    State(state): State<AppState>,
    Json(new): Json<NewProduct>,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    if new.price.is_some_and(|p| p < Decimal::ZERO) {
        return Err(AppError::Validation(
            "Price must not be negative".to_string(),
        ));
    }

    let product = products::create(state.store(), new).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            product,
            message: "Product created successfully".to_string(),
        }),
    ))
}

/// `PUT /api/admin/products/{id}` - partial update; omitted fields keep
/// their prior values.
pub async fn update(
    _auth: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<ProductResponse>> {
    if patch.price.is_some_and(|p| p < Decimal::ZERO) {
        return Err(AppError::Validation(
            "Price must not be negative".to_string(),
        ));
    }

    let product = products::update(state.store(), &id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(ProductResponse {
        product,
        message: "Product updated successfully".to_string(),
    }))
}

/// `DELETE /api/admin/products/{id}` - hard delete, no tombstone.
pub async fn remove(
    _auth: RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>> {
    let product = products::remove(state.store(), &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(ProductResponse {
        product,
        message: "Product deleted successfully".to_string(),
    }))
}

//! Public product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use solea_core::{Currency, Product, QueryCriteria, SortKey, filter_products};

use crate::error::Result;
use crate::state::AppState;
use crate::store::{products, settings};

/// Query parameters for the public product listing.
///
/// Everything arrives as an optional string; numeric and sort values are
/// parsed leniently and an unparseable value simply drops that constraint,
/// matching the documented permissive filter contract.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub category: Option<String>,
    pub hair_type: Option<String>,
    pub special: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl ProductListQuery {
    fn into_criteria(self) -> QueryCriteria {
        QueryCriteria {
            category: self.category,
            hair_type: self.hair_type,
            special: self.special,
            min_price: self.min_price.and_then(|v| v.parse::<Decimal>().ok()),
            max_price: self.max_price.and_then(|v| v.parse::<Decimal>().ok()),
            search: self.search,
            sort: self.sort.as_deref().and_then(SortKey::parse),
        }
    }
}

/// Response for `GET /api/products`.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub currency: Currency,
    pub total: usize,
}

/// Response for `GET /api/products/{id}`.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: Product,
    pub currency: Currency,
}

/// `GET /api/products` - list visible products, filtered and sorted.
///
/// Hidden products are excluded before any criteria are applied; only the
/// admin listing sees them.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<ProductListResponse>> {
    let catalog = products::list(state.store()).await?;
    let visible: Vec<Product> = catalog.into_iter().filter(|p| p.visible).collect();

    let matched = filter_products(&visible, &query.into_criteria());
    let currency = settings::load(state.store()).await?.currency;

    Ok(Json(ProductListResponse {
        total: matched.len(),
        products: matched,
        currency,
    }))
}

/// `GET /api/products/{id}` - fetch a single product.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>> {
    let product = products::find(state.store(), &id)
        .await?
        .ok_or_else(|| crate::error::AppError::NotFound("Product not found".to_string()))?;
    let currency = settings::load(state.store()).await?.currency;

    Ok(Json(ProductResponse { product, currency }))
}

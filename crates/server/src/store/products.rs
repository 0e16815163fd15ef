//! Product store operations.
//!
//! Every mutation holds the products lock across the whole
//! read-modify-write, then rewrites `products.json` wholesale.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use solea_core::{Product, ProductVariant};
use uuid::Uuid;

use super::{JsonStore, StoreError, read_document, write_document};

/// On-disk layout of `products.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductsDocument {
    pub products: Vec<Product>,
}

/// Request body for product creation. Every field is optional; the server
/// fills the same defaults the admin UI has always relied on.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub hair_type: Option<Vec<String>>,
    pub special: Option<Vec<String>>,
    pub sku: Option<String>,
    pub images: Option<Vec<String>>,
    pub variants: Option<Vec<ProductVariant>>,
    pub benefits: Option<Vec<String>>,
    pub ingredients: Option<String>,
    pub certifications: Option<Vec<String>>,
    pub stock: Option<i64>,
    pub visible: Option<bool>,
}

/// Request body for product update: a partial merge. Omitted fields retain
/// their prior values; `rating` and `reviewCount` are never client-writable.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub hair_type: Option<Vec<String>>,
    pub special: Option<Vec<String>>,
    pub sku: Option<String>,
    pub images: Option<Vec<String>>,
    pub variants: Option<Vec<ProductVariant>>,
    pub benefits: Option<Vec<String>>,
    pub ingredients: Option<String>,
    pub certifications: Option<Vec<String>>,
    pub stock: Option<i64>,
    pub visible: Option<bool>,
}

/// Load the full catalog, hidden products included.
///
/// # Errors
///
/// Returns an error if the document cannot be read or parsed.
pub async fn list(store: &JsonStore) -> Result<Vec<Product>, StoreError> {
    let _guard = store.lock_products().await;
    let doc: ProductsDocument = read_document(&store.products_path()).await?;
    Ok(doc.products)
}

/// Find a product by id.
///
/// # Errors
///
/// Returns an error if the document cannot be read or parsed.
pub async fn find(store: &JsonStore, id: &str) -> Result<Option<Product>, StoreError> {
    let _guard = store.lock_products().await;
    let doc: ProductsDocument = read_document(&store.products_path()).await?;
    Ok(doc.products.into_iter().find(|p| p.id == id))
}

/// Create a product, assigning id and timestamps, and persist the catalog.
///
/// # Errors
///
/// Returns an error if the document cannot be read, parsed, or written.
pub async fn create(store: &JsonStore, new: NewProduct) -> Result<Product, StoreError> {
    let _guard = store.lock_products().await;
    let path = store.products_path();
    let mut doc: ProductsDocument = read_document(&path).await?;

    let product = build_product(new);
    doc.products.push(product.clone());
    write_document(&path, &doc).await?;

    Ok(product)
}

/// Apply a partial update to a product and persist the catalog.
///
/// Returns `None` when no product has the given id.
///
/// # Errors
///
/// Returns an error if the document cannot be read, parsed, or written.
pub async fn update(
    store: &JsonStore,
    id: &str,
    patch: ProductPatch,
) -> Result<Option<Product>, StoreError> {
    let _guard = store.lock_products().await;
    let path = store.products_path();
    let mut doc: ProductsDocument = read_document(&path).await?;

    let Some(product) = doc.products.iter_mut().find(|p| p.id == id) else {
        return Ok(None);
    };
    apply_patch(product, patch);
    let updated = product.clone();

    write_document(&path, &doc).await?;
    Ok(Some(updated))
}

/// Hard-delete a product and persist the catalog.
///
/// Returns the removed product, or `None` when the id is unknown.
///
/// # Errors
///
/// Returns an error if the document cannot be read, parsed, or written.
pub async fn remove(store: &JsonStore, id: &str) -> Result<Option<Product>, StoreError> {
    let _guard = store.lock_products().await;
    let path = store.products_path();
    let mut doc: ProductsDocument = read_document(&path).await?;

    let Some(index) = doc.products.iter().position(|p| p.id == id) else {
        return Ok(None);
    };
    let removed = doc.products.remove(index);

    write_document(&path, &doc).await?;
    Ok(Some(removed))
}

/// Materialize a new product from the creation request.
fn build_product(new: NewProduct) -> Product {
    let now = Utc::now();
    Product {
        id: Uuid::new_v4().to_string(),
        name: new.name.unwrap_or_else(|| "New Product".to_string()),
        description: new.description.unwrap_or_default(),
        long_description: new.long_description.unwrap_or_default(),
        price: new.price.unwrap_or_default(),
        category: new.category.unwrap_or_else(|| "shampoo".to_string()),
        hair_type: new.hair_type.unwrap_or_default(),
        special: new.special.unwrap_or_default(),
        sku: new
            .sku
            .unwrap_or_else(|| format!("SKU-{}", now.timestamp_millis())),
        rating: Decimal::ZERO,
        review_count: 0,
        images: new
            .images
            .unwrap_or_else(|| vec!["images/placeholder.jpg".to_string()]),
        variants: new.variants.unwrap_or_default(),
        benefits: new.benefits.unwrap_or_default(),
        ingredients: new.ingredients.unwrap_or_default(),
        certifications: new.certifications.unwrap_or_default(),
        stock: new.stock.unwrap_or(0),
        visible: new.visible.unwrap_or(true),
        created_at: now,
        updated_at: now,
    }
}

/// Merge a patch into an existing product. Omitted fields keep prior values.
fn apply_patch(product: &mut Product, patch: ProductPatch) {
    if let Some(name) = patch.name {
        product.name = name;
    }
    if let Some(description) = patch.description {
        product.description = description;
    }
    if let Some(long_description) = patch.long_description {
        product.long_description = long_description;
    }
    if let Some(price) = patch.price {
        product.price = price;
    }
    if let Some(category) = patch.category {
        product.category = category;
    }
    if let Some(hair_type) = patch.hair_type {
        product.hair_type = hair_type;
    }
    if let Some(special) = patch.special {
        product.special = special;
    }
    if let Some(sku) = patch.sku {
        product.sku = sku;
    }
    if let Some(images) = patch.images {
        product.images = images;
    }
    if let Some(variants) = patch.variants {
        product.variants = variants;
    }
    if let Some(benefits) = patch.benefits {
        product.benefits = benefits;
    }
    if let Some(ingredients) = patch.ingredients {
        product.ingredients = ingredients;
    }
    if let Some(certifications) = patch.certifications {
        product.certifications = certifications;
    }
    if let Some(stock) = patch.stock {
        product.stock = stock;
    }
    if let Some(visible) = patch.visible {
        product.visible = visible;
    }
    product.updated_at = Utc::now();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn empty_store() -> (TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let doc = ProductsDocument {
            products: Vec::new(),
        };
        std::fs::write(
            dir.path().join("products.json"),
            serde_json::to_vec_pretty(&doc).unwrap(),
        )
        .unwrap();
        let store = JsonStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn build_product_applies_creation_defaults() {
        let product = build_product(NewProduct::default());
        assert_eq!(product.name, "New Product");
        assert_eq!(product.category, "shampoo");
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.rating, Decimal::ZERO);
        assert_eq!(product.review_count, 0);
        assert_eq!(product.images, vec!["images/placeholder.jpg".to_string()]);
        assert!(product.sku.starts_with("SKU-"));
        assert!(product.visible);
        assert!(!product.id.is_empty());
    }

    #[test]
    fn apply_patch_keeps_omitted_fields() {
        let mut product = build_product(NewProduct {
            name: Some("Argan Oil".to_string()),
            price: Some(Decimal::new(2490, 2)),
            stock: Some(7),
            ..NewProduct::default()
        });
        let before_update = product.updated_at;

        apply_patch(
            &mut product,
            ProductPatch {
                price: Some(Decimal::new(1990, 2)),
                ..ProductPatch::default()
            },
        );

        assert_eq!(product.name, "Argan Oil");
        assert_eq!(product.price, Decimal::new(1990, 2));
        assert_eq!(product.stock, 7);
        assert!(product.updated_at >= before_update);
    }

    #[tokio::test]
    async fn create_update_remove_round_trip() {
        let (_dir, store) = empty_store();

        let created = create(
            &store,
            NewProduct {
                name: Some("Hydrating Mask".to_string()),
                category: Some("mask".to_string()),
                ..NewProduct::default()
            },
        )
        .await
        .unwrap();

        let found = find(&store, &created.id).await.unwrap().unwrap();
        assert_eq!(found, created);

        let updated = update(
            &store,
            &created.id,
            ProductPatch {
                visible: Some(false),
                ..ProductPatch::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
        assert!(!updated.visible);
        assert_eq!(updated.name, "Hydrating Mask");

        let removed = remove(&store, &created.id).await.unwrap().unwrap();
        assert_eq!(removed.id, created.id);
        assert!(find(&store, &created.id).await.unwrap().is_none());
        assert!(list(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let (_dir, store) = empty_store();
        let result = update(&store, "missing", ProductPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(remove(&store, "missing").await.unwrap().is_none());
    }
}

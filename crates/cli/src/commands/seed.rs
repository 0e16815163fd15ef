//! Seed the data directory with default JSON stores.
//!
//! Stands in for a checked-in data directory: creates `products.json` with a
//! small starter catalog, an empty `orders.json`, and `settings.json` with
//! default settings (admin credentials `admin`/`admin` - change them with
//! `solea-cli admin set-password`).

use std::path::Path;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};

use solea_core::{Product, Settings};
use solea_server::store::orders::OrdersDocument;
use solea_server::store::products::ProductsDocument;

/// Write the default data files into `data_dir`.
///
/// Existing files are left alone unless `force` is set.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a file cannot be
/// serialized or written.
pub async fn run(data_dir: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    tokio::fs::create_dir_all(data_dir).await?;

    let products = ProductsDocument {
        products: starter_catalog(),
    };
    let orders = OrdersDocument { orders: Vec::new() };
    let settings = Settings::default();

    write_if_allowed(
        &data_dir.join("products.json"),
        &serde_json::to_vec_pretty(&products)?,
        force,
    )
    .await?;
    write_if_allowed(
        &data_dir.join("orders.json"),
        &serde_json::to_vec_pretty(&orders)?,
        force,
    )
    .await?;
    write_if_allowed(
        &data_dir.join("settings.json"),
        &serde_json::to_vec_pretty(&settings)?,
        force,
    )
    .await?;

    info!(dir = %data_dir.display(), "Data directory seeded");
    Ok(())
}

async fn write_if_allowed(
    path: &Path,
    bytes: &[u8],
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        warn!(file = %path.display(), "File exists, skipping (use --force to overwrite)");
        return Ok(());
    }
    tokio::fs::write(path, bytes).await?;
    info!(file = %path.display(), "Wrote file");
    Ok(())
}

/// A small catalog to make a fresh install browsable.
fn starter_catalog() -> Vec<Product> {
    let now = Utc::now();
    let product = |id: &str,
                   name: &str,
                   description: &str,
                   price: Decimal,
                   category: &str,
                   hair_type: &[&str],
                   special: &[&str]| Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        long_description: String::new(),
        price,
        category: category.to_string(),
        hair_type: hair_type.iter().map(ToString::to_string).collect(),
        special: special.iter().map(ToString::to_string).collect(),
        sku: format!("SKU-{id}"),
        rating: Decimal::ZERO,
        review_count: 0,
        images: vec!["images/placeholder.jpg".to_string()],
        variants: Vec::new(),
        benefits: Vec::new(),
        ingredients: String::new(),
        certifications: Vec::new(),
        stock: 10,
        visible: true,
        created_at: now,
        updated_at: now,
    };

    vec![
        product(
            "gentle-shampoo",
            "Gentle Shampoo",
            "Mild daily shampoo for all hair types",
            Decimal::new(1290, 2),
            "shampoo",
            &["normal", "dry"],
            &["bestseller"],
        ),
        product(
            "repair-mask",
            "Repair Mask",
            "Deep conditioning mask for damaged hair",
            Decimal::new(1890, 2),
            "mask",
            &["dry", "damaged"],
            &["bio"],
        ),
        product(
            "argan-oil",
            "Argan Oil",
            "Nourishing finishing oil",
            Decimal::new(2450, 2),
            "oil",
            &["dry", "curly"],
            &["new"],
        ),
    ]
}

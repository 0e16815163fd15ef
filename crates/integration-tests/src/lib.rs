//! Shared helpers for integration tests.
//!
//! Each test builds a full router over a fresh temp data directory, seeded
//! with a small known catalog, an empty order book, and settings with known
//! admin credentials. Requests go through `tower::ServiceExt::oneshot`, so
//! the tests exercise routing, extraction, and serialization without binding
//! a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use solea_core::{AdminCredentials, Business, Contact, Currency, Product, Settings};
use solea_server::config::ServerConfig;
use solea_server::state::AppState;
use solea_server::store::orders::OrdersDocument;
use solea_server::store::products::ProductsDocument;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "test-password";

/// Build a router over a freshly seeded temp data directory.
///
/// The `TempDir` must be kept alive for the duration of the test; dropping it
/// deletes the data files out from under the store.
///
/// # Panics
///
/// Panics if the data files cannot be written.
#[must_use]
pub fn seeded_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().expect("create temp dir");

    let products = ProductsDocument {
        products: test_catalog(),
    };
    let orders = OrdersDocument { orders: Vec::new() };
    let settings = test_settings();

    write_json(&dir, "products.json", &products);
    write_json(&dir, "orders.json", &orders);
    write_json(&dir, "settings.json", &settings);

    let config = ServerConfig {
        data_dir: dir.path().to_path_buf(),
        host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
        port: 0,
    };
    let app = solea_server::app(AppState::new(config));
    (dir, app)
}

fn write_json<T: serde::Serialize>(dir: &TempDir, name: &str, doc: &T) {
    let bytes = serde_json::to_vec_pretty(doc).expect("serialize seed document");
    std::fs::write(dir.path().join(name), bytes).expect("write seed document");
}

/// Basic auth header value for the seeded admin credentials.
#[must_use]
pub fn admin_auth() -> String {
    basic_auth(ADMIN_USERNAME, ADMIN_PASSWORD)
}

/// Basic auth header value for arbitrary credentials.
#[must_use]
pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{username}:{password}")))
}

/// Send a request through the router and return status plus parsed JSON body.
///
/// Non-JSON bodies (the health endpoint) come back as `Value::Null`.
///
/// # Panics
///
/// Panics if the request cannot be built or the response body cannot be read.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// GET a URI without authentication.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None, None).await
}

/// Three products with distinct prices, ratings and creation dates; the
/// repair mask is hidden from the storefront.
fn test_catalog() -> Vec<Product> {
    vec![
        test_product(TestProduct {
            id: "gentle-shampoo",
            name: "Gentle Shampoo",
            description: "Mild daily shampoo for all hair types",
            price: Decimal::new(1000, 2),
            category: "shampoo",
            hair_type: &["normal", "dry"],
            special: &["bestseller"],
            rating: Decimal::new(45, 1),
            review_count: 12,
            created: (2024, 1, 10),
            visible: true,
        }),
        test_product(TestProduct {
            id: "repair-mask",
            name: "Repair Mask",
            description: "Deep conditioning mask for damaged hair",
            price: Decimal::new(3000, 2),
            category: "mask",
            hair_type: &["damaged"],
            special: &["bio"],
            rating: Decimal::new(48, 1),
            review_count: 40,
            created: (2024, 3, 5),
            visible: false,
        }),
        test_product(TestProduct {
            id: "argan-oil",
            name: "Argan Oil",
            description: "Nourishing oil, use after shampoo for shine",
            price: Decimal::new(2450, 2),
            category: "oil",
            hair_type: &["dry", "curly"],
            special: &["new"],
            rating: Decimal::new(42, 1),
            review_count: 7,
            created: (2024, 2, 20),
            visible: true,
        }),
    ]
}

struct TestProduct<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    price: Decimal,
    category: &'a str,
    hair_type: &'a [&'a str],
    special: &'a [&'a str],
    rating: Decimal,
    review_count: u64,
    created: (i32, u32, u32),
    visible: bool,
}

fn test_product(item: TestProduct<'_>) -> Product {
    let (year, month, day) = item.created;
    let created_at = Utc
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid test timestamp");
    Product {
        id: item.id.to_string(),
        name: item.name.to_string(),
        description: item.description.to_string(),
        long_description: String::new(),
        price: item.price,
        category: item.category.to_string(),
        hair_type: item.hair_type.iter().map(ToString::to_string).collect(),
        special: item.special.iter().map(ToString::to_string).collect(),
        sku: format!("SKU-{}", item.id),
        rating: item.rating,
        review_count: item.review_count,
        images: vec!["images/placeholder.jpg".to_string()],
        variants: Vec::new(),
        benefits: Vec::new(),
        ingredients: String::new(),
        certifications: Vec::new(),
        stock: 10,
        visible: item.visible,
        created_at,
        updated_at: created_at,
    }
}

fn test_settings() -> Settings {
    Settings {
        currency: Currency {
            code: "EUR".to_string(),
            symbol: "\u{20ac}".to_string(),
            name: "Euro".to_string(),
        },
        business: Business {
            name: "Solea Test Shop".to_string(),
            free_shipping_threshold: Decimal::new(50, 0),
            shipping_cost: Decimal::new(590, 2),
        },
        contact: Contact {
            phone: "+33 1 23 45 67 89".to_string(),
            email: "hello@solea.test".to_string(),
            whatsapp: String::new(),
            address: "12 Rue des Fleurs, Paris".to_string(),
        },
        admin: AdminCredentials {
            username: ADMIN_USERNAME.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        },
    }
}

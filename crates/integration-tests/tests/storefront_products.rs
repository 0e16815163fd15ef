//! Public catalog endpoints: listing, filtering, sorting, single lookup.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::Value;
use solea_integration_tests::{get, seeded_app};

fn product_ids(body: &Value) -> Vec<&str> {
    body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn list_excludes_hidden_products_and_reports_currency() {
    let (_dir, app) = seeded_app();

    let (status, body) = get(&app, "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["currency"]["code"], "EUR");
    let ids = product_ids(&body);
    assert!(ids.contains(&"gentle-shampoo"));
    assert!(ids.contains(&"argan-oil"));
    assert!(!ids.contains(&"repair-mask"));
}

#[tokio::test]
async fn category_filter_matches_exactly() {
    let (_dir, app) = seeded_app();

    let (status, body) = get(&app, "/api/products?category=shampoo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(product_ids(&body), vec!["gentle-shampoo"]);
}

#[tokio::test]
async fn hair_type_filter_matches_membership() {
    let (_dir, app) = seeded_app();

    let (_, body) = get(&app, "/api/products?hairType=curly").await;
    assert_eq!(product_ids(&body), vec!["argan-oil"]);

    // Both visible products list "dry".
    let (_, body) = get(&app, "/api/products?hairType=dry").await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn search_is_case_insensitive_over_name_and_description() {
    let (_dir, app) = seeded_app();

    // "shampoo" appears in one name and one description.
    let (_, body) = get(&app, "/api/products?search=SHAMPOO").await;
    assert_eq!(body["total"], 2);

    let (_, body) = get(&app, "/api/products?search=nourishing").await;
    assert_eq!(product_ids(&body), vec!["argan-oil"]);
}

#[tokio::test]
async fn price_bounds_are_inclusive() {
    let (_dir, app) = seeded_app();

    let (_, body) = get(&app, "/api/products?minPrice=24.5").await;
    assert_eq!(product_ids(&body), vec!["argan-oil"]);

    let (_, body) = get(&app, "/api/products?maxPrice=10").await;
    assert_eq!(product_ids(&body), vec!["gentle-shampoo"]);
}

#[tokio::test]
async fn malformed_min_price_is_ignored() {
    let (_dir, app) = seeded_app();

    let (status, body) = get(&app, "/api/products?minPrice=abc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn price_sorts_are_reverses_of_each_other() {
    let (_dir, app) = seeded_app();

    let (_, asc) = get(&app, "/api/products?sort=price-asc").await;
    let (_, desc) = get(&app, "/api/products?sort=price-desc").await;

    assert_eq!(product_ids(&asc), vec!["gentle-shampoo", "argan-oil"]);
    assert_eq!(product_ids(&desc), vec!["argan-oil", "gentle-shampoo"]);
}

#[tokio::test]
async fn newest_sort_orders_by_creation_date_descending() {
    let (_dir, app) = seeded_app();

    let (_, body) = get(&app, "/api/products?sort=newest").await;

    assert_eq!(product_ids(&body), vec!["argan-oil", "gentle-shampoo"]);
}

#[tokio::test]
async fn unknown_sort_keeps_store_order() {
    let (_dir, app) = seeded_app();

    let (status, body) = get(&app, "/api/products?sort=alphabetical").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(product_ids(&body), vec!["gentle-shampoo", "argan-oil"]);
}

#[tokio::test]
async fn filters_combine_with_and() {
    let (_dir, app) = seeded_app();

    let (_, body) = get(&app, "/api/products?hairType=dry&maxPrice=15").await;

    assert_eq!(product_ids(&body), vec!["gentle-shampoo"]);
}

#[tokio::test]
async fn single_product_lookup_returns_product_and_currency() {
    let (_dir, app) = seeded_app();

    let (status, body) = get(&app, "/api/products/argan-oil").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["name"], "Argan Oil");
    assert_eq!(body["product"]["price"], 24.5);
    assert_eq!(body["currency"]["symbol"], "\u{20ac}");
}

#[tokio::test]
async fn unknown_product_id_is_a_json_404() {
    let (_dir, app) = seeded_app();

    let (status, body) = get(&app, "/api/products/no-such-product").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn unmatched_path_is_a_json_404() {
    let (_dir, app) = seeded_app();

    let (status, body) = get(&app, "/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "API endpoint not found");
}

#[tokio::test]
async fn public_settings_omit_admin_credentials() {
    let (_dir, app) = seeded_app();

    let (status, body) = get(&app, "/api/settings").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currency"]["code"], "EUR");
    assert_eq!(body["business"]["name"], "Solea Test Shop");
    assert_eq!(body["contact"]["email"], "hello@solea.test");
    assert!(body.get("admin").is_none());
}

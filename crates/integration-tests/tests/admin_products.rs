//! Admin product CRUD and the auth gate in front of it.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;
use solea_integration_tests::{admin_auth, basic_auth, get, seeded_app, send};

#[tokio::test]
async fn admin_listing_requires_auth() {
    let (_dir, app) = seeded_app();

    let (status, body) = send(&app, "GET", "/api/admin/products", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Authentication required");

    let wrong = basic_auth("admin", "not-the-password");
    let (status, body) = send(&app, "GET", "/api/admin/products", Some(&wrong), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn malformed_auth_header_is_rejected() {
    let (_dir, app) = seeded_app();

    let (status, _) = send(
        &app,
        "GET",
        "/api/admin/products",
        Some("Bearer some-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        "GET",
        "/api/admin/products",
        Some("Basic not!base64!"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_listing_includes_hidden_products() {
    let (_dir, app) = seeded_app();
    let auth = admin_auth();

    let (status, body) = send(&app, "GET", "/api/admin/products", Some(&auth), None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["gentle-shampoo", "repair-mask", "argan-oil"]);
}

#[tokio::test]
async fn created_product_is_visible_on_the_storefront() {
    let (_dir, app) = seeded_app();
    let auth = admin_auth();

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/products",
        Some(&auth),
        Some(json!({
            "name": "Curl Cream",
            "price": 15.9,
            "category": "styling",
            "hairType": ["curly"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Product created successfully");
    let id = body["product"]["id"].as_str().unwrap().to_string();
    assert!(body["product"]["sku"].as_str().unwrap().starts_with("SKU-"));
    assert_eq!(body["product"]["rating"], 0.0);
    assert_eq!(body["product"]["visible"], true);

    let (status, shown) = get(&app, &format!("/api/products/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shown["product"]["name"], "Curl Cream");
    assert_eq!(shown["product"]["price"], 15.9);
}

#[tokio::test]
async fn creation_applies_defaults_for_omitted_fields() {
    let (_dir, app) = seeded_app();
    let auth = admin_auth();

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/products",
        Some(&auth),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["product"]["name"], "New Product");
    assert_eq!(body["product"]["category"], "shampoo");
    assert_eq!(body["product"]["price"], 0.0);
    assert_eq!(body["product"]["images"], json!(["images/placeholder.jpg"]));
}

#[tokio::test]
async fn negative_price_is_rejected_on_create_and_update() {
    let (_dir, app) = seeded_app();
    let auth = admin_auth();

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/products",
        Some(&auth),
        Some(json!({ "name": "Broken", "price": -1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Price must not be negative");

    let (status, _) = send(
        &app,
        "PUT",
        "/api/admin/products/gentle-shampoo",
        Some(&auth),
        Some(json!({ "price": -0.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn partial_update_keeps_omitted_fields() {
    let (_dir, app) = seeded_app();
    let auth = admin_auth();

    let (status, body) = send(
        &app,
        "PUT",
        "/api/admin/products/gentle-shampoo",
        Some(&auth),
        Some(json!({ "price": 11.5 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product updated successfully");
    assert_eq!(body["product"]["price"], 11.5);
    assert_eq!(body["product"]["name"], "Gentle Shampoo");
    assert_eq!(body["product"]["category"], "shampoo");
}

#[tokio::test]
async fn hiding_a_product_removes_it_from_the_storefront() {
    let (_dir, app) = seeded_app();
    let auth = admin_auth();

    send(
        &app,
        "PUT",
        "/api/admin/products/argan-oil",
        Some(&auth),
        Some(json!({ "visible": false })),
    )
    .await;

    let (_, body) = get(&app, "/api/products").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["products"][0]["id"], "gentle-shampoo");
}

#[tokio::test]
async fn updating_unknown_product_is_a_404() {
    let (_dir, app) = seeded_app();
    let auth = admin_auth();

    let (status, body) = send(
        &app,
        "PUT",
        "/api/admin/products/no-such-id",
        Some(&auth),
        Some(json!({ "price": 5.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn deleted_product_is_gone_from_both_surfaces() {
    let (_dir, app) = seeded_app();
    let auth = admin_auth();

    let (status, body) = send(
        &app,
        "DELETE",
        "/api/admin/products/argan-oil",
        Some(&auth),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted successfully");
    assert_eq!(body["product"]["id"], "argan-oil");

    let (status, _) = get(&app, "/api/products/argan-oil").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listing) = send(&app, "GET", "/api/admin/products", Some(&auth), None).await;
    assert_eq!(listing["products"].as_array().unwrap().len(), 2);
}

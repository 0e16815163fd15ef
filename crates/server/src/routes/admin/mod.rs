//! Admin route handlers.
//!
//! Every handler except `login` carries the [`RequireAdminAuth`] extractor,
//! so credentials are checked on each request.
//!
//! [`RequireAdminAuth`]: crate::middleware::RequireAdminAuth

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

pub mod auth;
pub mod orders;
pub mod products;
pub mod settings;

/// Routes nested under `/api/admin`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::remove),
        )
        .route("/orders", get(orders::list))
        .route("/orders/{id}", put(orders::update))
        .route("/settings", get(settings::show).put(settings::update))
}

//! Route handlers and router assembly.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

pub mod admin;
pub mod orders;
pub mod products;
pub mod settings;

/// Public API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(products::list))
        .route("/api/products/{id}", get(products::show))
        .route("/api/settings", get(settings::show))
        .route("/api/orders", post(orders::submit))
        .nest("/api/admin", admin::routes())
}

/// Assemble the full application: health check, API routes, JSON 404
/// fallback, and request tracing.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// JSON 404 for unmatched paths, matching what API clients expect.
async fn fallback() -> AppError {
    AppError::NotFound("API endpoint not found".to_string())
}

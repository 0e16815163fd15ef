//! Authentication extractor for admin routes.
//!
//! The auth gate is stateless: every admin request re-presents credentials
//! via `Authorization: Basic`, compared in plaintext against the settings
//! store's admin section. No sessions, no tokens, no rate limiting - the
//! documented (weak) contract of this system.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::AppError;
use crate::state::AppState;
use crate::store::settings;

/// Extractor that requires valid admin credentials on the request.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     _auth: RequireAdminAuth,
///     State(state): State<AppState>,
/// ) -> Result<Json<Response>> { /* ... */ }
/// ```
pub struct RequireAdminAuth;

impl FromRequestParts<AppState> for RequireAdminAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        let (username, password) = parse_basic(header)
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        let valid = settings::verify_credentials(state.store(), &username, &password).await?;
        if valid {
            Ok(Self)
        } else {
            Err(AppError::Unauthorized("Invalid credentials".to_string()))
        }
    }
}

/// Parse an `Authorization: Basic <base64 user:pass>` header value.
fn parse_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

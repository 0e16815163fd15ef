//! Admin login.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::settings;

/// Request body for `POST /api/admin/login`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub username: String,
}

/// `POST /api/admin/login` - check credentials.
///
/// Stateless: no session or token is issued. The dashboard re-presents the
/// same credentials on subsequent admin requests.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(AppError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    let valid =
        settings::verify_credentials(state.store(), &request.username, &request.password).await?;
    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        username: request.username,
    }))
}

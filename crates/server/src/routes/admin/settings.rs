//! Admin settings read/update.

use axum::{Json, extract::State};
use serde::Serialize;
use solea_core::{Business, Contact, Currency};

use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;
use crate::store::settings;
use crate::store::settings::SettingsUpdate;

/// Response for `GET /api/admin/settings`: everything except the password.
#[derive(Debug, Serialize)]
pub struct AdminSettingsResponse {
    pub currency: Currency,
    pub contact: Contact,
    pub business: Business,
    pub admin: AdminUsername,
}

#[derive(Debug, Serialize)]
pub struct AdminUsername {
    pub username: String,
}

/// Response for `PUT /api/admin/settings`.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub message: String,
}

/// `GET /api/admin/settings` - full settings minus the admin password.
pub async fn show(
    _auth: RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<AdminSettingsResponse>> {
    let settings = settings::load(state.store()).await?;

    Ok(Json(AdminSettingsResponse {
        currency: settings.currency,
        contact: settings.contact,
        business: settings.business,
        admin: AdminUsername {
            username: settings.admin.username,
        },
    }))
}

/// `PUT /api/admin/settings` - merge an update by section.
pub async fn update(
    _auth: RequireAdminAuth,
    State(state): State<AppState>,
    Json(body): Json<SettingsUpdate>,
) -> Result<Json<UpdateResponse>> {
    settings::update(state.store(), body).await?;

    Ok(Json(UpdateResponse {
        message: "Settings updated successfully".to_string(),
    }))
}

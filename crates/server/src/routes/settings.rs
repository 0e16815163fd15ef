//! Public settings route handler.

use axum::{Json, extract::State};
use serde::Serialize;
use solea_core::{Business, Contact, Currency};

use crate::error::Result;
use crate::state::AppState;
use crate::store::settings;

/// Response for `GET /api/settings`: the public subset only. Admin
/// credentials never appear here.
#[derive(Debug, Serialize)]
pub struct PublicSettingsResponse {
    pub currency: Currency,
    pub contact: Contact,
    pub business: Business,
}

/// `GET /api/settings` - public settings (currency, contact, business).
pub async fn show(State(state): State<AppState>) -> Result<Json<PublicSettingsResponse>> {
    let settings = settings::load(state.store()).await?;

    Ok(Json(PublicSettingsResponse {
        currency: settings.currency,
        contact: settings.contact,
        business: settings.business,
    }))
}

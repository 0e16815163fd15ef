//! Settings store operations.
//!
//! The settings document is a singleton. Updates are a per-section partial
//! merge: a section absent from the request leaves that section untouched,
//! and within a supplied section, omitted fields keep their prior values.
//! Applying the same merge twice is idempotent.

use rust_decimal::Decimal;
use serde::Deserialize;
use solea_core::Settings;

use super::{JsonStore, StoreError, read_document, write_document};

/// Request body for a settings update.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub currency: Option<CurrencyUpdate>,
    pub contact: Option<ContactUpdate>,
    pub business: Option<BusinessUpdate>,
    pub admin: Option<AdminUpdate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyUpdate {
    pub code: Option<String>,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessUpdate {
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub free_shipping_threshold: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub shipping_cost: Option<Decimal>,
}

/// Only the password is admin-writable through the settings API.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdate {
    pub password: Option<String>,
}

/// Load the full settings document, credentials included.
///
/// # Errors
///
/// Returns an error if the document cannot be read or parsed.
pub async fn load(store: &JsonStore) -> Result<Settings, StoreError> {
    let _guard = store.lock_settings().await;
    read_document(&store.settings_path()).await
}

/// Merge an update into the settings document and persist it.
///
/// # Errors
///
/// Returns an error if the document cannot be read, parsed, or written.
pub async fn update(store: &JsonStore, update: SettingsUpdate) -> Result<Settings, StoreError> {
    let _guard = store.lock_settings().await;
    let path = store.settings_path();
    let mut settings: Settings = read_document(&path).await?;

    apply_update(&mut settings, update);
    write_document(&path, &settings).await?;
    Ok(settings)
}

/// Compare supplied credentials against the stored admin section.
///
/// Direct plaintext equality, per the documented store contract. No hashing,
/// no rate limiting, no lockout.
///
/// # Errors
///
/// Returns an error if the document cannot be read or parsed.
pub async fn verify_credentials(
    store: &JsonStore,
    username: &str,
    password: &str,
) -> Result<bool, StoreError> {
    let settings = load(store).await?;
    Ok(settings.admin.username == username && settings.admin.password == password)
}

fn apply_update(settings: &mut Settings, update: SettingsUpdate) {
    if let Some(currency) = update.currency {
        if let Some(code) = currency.code {
            settings.currency.code = code;
        }
        if let Some(symbol) = currency.symbol {
            settings.currency.symbol = symbol;
        }
        if let Some(name) = currency.name {
            settings.currency.name = name;
        }
    }
    if let Some(contact) = update.contact {
        if let Some(phone) = contact.phone {
            settings.contact.phone = phone;
        }
        if let Some(email) = contact.email {
            settings.contact.email = email;
        }
        if let Some(whatsapp) = contact.whatsapp {
            settings.contact.whatsapp = whatsapp;
        }
        if let Some(address) = contact.address {
            settings.contact.address = address;
        }
    }
    if let Some(business) = update.business {
        if let Some(name) = business.name {
            settings.business.name = name;
        }
        if let Some(threshold) = business.free_shipping_threshold {
            settings.business.free_shipping_threshold = threshold;
        }
        if let Some(cost) = business.shipping_cost {
            settings.business.shipping_cost = cost;
        }
    }
    if let Some(admin) = update.admin
        && let Some(password) = admin.password
    {
        settings.admin.password = password;
    }
}

//! Store settings, a singleton record in `settings.json`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The full settings document, including admin credentials.
///
/// `admin.password` is stored and compared in plaintext. That is the
/// documented contract of the existing stores, kept for behavioral parity;
/// it never leaves the server through any API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub currency: Currency,
    pub business: Business,
    pub contact: Contact,
    pub admin: AdminCredentials,
}

/// Display currency for the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    pub symbol: String,
    #[serde(default)]
    pub name: String,
}

/// Business-level commerce settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub free_shipping_threshold: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub shipping_cost: Decimal,
}

/// Public contact details shown on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub address: String,
}

/// Admin credentials checked on every admin request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: Currency {
                code: "EUR".to_string(),
                symbol: "\u{20ac}".to_string(),
                name: "Euro".to_string(),
            },
            business: Business {
                name: "Solea".to_string(),
                free_shipping_threshold: Decimal::new(50, 0),
                shipping_cost: Decimal::new(590, 2),
            },
            contact: Contact {
                phone: String::new(),
                email: String::new(),
                whatsapp: String::new(),
                address: String::new(),
            },
            admin: AdminCredentials {
                username: "admin".to_string(),
                password: "admin".to_string(),
            },
        }
    }
}

//! Records persisted in the JSON stores.
//!
//! Field names serialize in camelCase so the on-disk documents and the wire
//! format stay byte-compatible with the existing storefront and admin UI.

mod order;
mod product;
mod settings;

pub use order::{Customer, Order, OrderItem, OrderStatus};
pub use product::{Product, ProductVariant};
pub use settings::{AdminCredentials, Business, Contact, Currency, Settings};

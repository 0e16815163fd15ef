//! Solea Core - Shared types and catalog query engine.
//!
//! This crate provides the common types used across all Solea components:
//! - `server` - HTTP API for the storefront and admin dashboard
//! - `cli` - Command-line tools for seeding and management
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP.
//! The catalog query engine lives here because it is a pure transformation
//! over an already-loaded product list.
//!
//! # Modules
//!
//! - [`types`] - `Product`, `Order`, and `Settings` records as persisted in
//!   the JSON stores
//! - [`catalog`] - Filter/sort engine over the product catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;

//! JSON-file-backed stores.
//!
//! Each store (products, orders, settings) is one whole JSON document on
//! disk. There is no partial update: a load parses the entire file and a save
//! rewrites it. Two hardenings over the naive contract:
//!
//! - Saves write to a temp file in the same directory and rename it over the
//!   target, so a crash mid-write cannot corrupt the store.
//! - Each document has its own async mutex, held across every
//!   read-modify-write sequence. Concurrent writers to the same store
//!   serialize instead of racing into a lost update.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

pub mod orders;
pub mod products;
pub mod settings;

/// Error type for store operations.
///
/// Distinguishes "file missing/unreadable/unwritable" from "content is not
/// valid JSON"; both surface to clients as a 500, never a crash.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Handle to the data directory and the per-document write locks.
#[derive(Debug)]
pub struct JsonStore {
    data_dir: PathBuf,
    products_lock: Mutex<()>,
    orders_lock: Mutex<()>,
    settings_lock: Mutex<()>,
}

impl JsonStore {
    /// Create a store rooted at `data_dir`.
    ///
    /// The directory is expected to contain `products.json`, `orders.json`
    /// and `settings.json` (see `solea-cli seed`); missing files surface as
    /// [`StoreError::Io`] on first access.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            products_lock: Mutex::new(()),
            orders_lock: Mutex::new(()),
            settings_lock: Mutex::new(()),
        }
    }

    pub(crate) fn products_path(&self) -> PathBuf {
        self.data_dir.join("products.json")
    }

    pub(crate) fn orders_path(&self) -> PathBuf {
        self.data_dir.join("orders.json")
    }

    pub(crate) fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    pub(crate) async fn lock_products(&self) -> MutexGuard<'_, ()> {
        self.products_lock.lock().await
    }

    pub(crate) async fn lock_orders(&self) -> MutexGuard<'_, ()> {
        self.orders_lock.lock().await
    }

    pub(crate) async fn lock_settings(&self) -> MutexGuard<'_, ()> {
        self.settings_lock.lock().await
    }
}

/// Read and parse a whole JSON document.
pub(crate) async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Serialize and atomically replace a whole JSON document.
///
/// The document is pretty-printed to keep the files human-readable, matching
/// the existing data layout.
pub(crate) async fn write_document<T: Serialize>(path: &Path, doc: &T) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(doc)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

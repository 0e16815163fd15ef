//! Admin account management.

use std::path::Path;

use tracing::info;

use solea_server::store::settings::{AdminUpdate, SettingsUpdate};
use solea_server::store::{JsonStore, settings};

/// Update the admin password in the settings store.
///
/// # Errors
///
/// Returns an error if the settings file cannot be read, parsed, or written.
pub async fn set_password(data_dir: &Path, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonStore::new(data_dir);

    let updated = settings::update(
        &store,
        SettingsUpdate {
            admin: Some(AdminUpdate {
                password: Some(password.to_string()),
            }),
            ..SettingsUpdate::default()
        },
    )
    .await?;

    info!(username = %updated.admin.username, "Admin password updated");
    Ok(())
}

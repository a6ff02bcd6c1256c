//! Storage layer: data directory, TOML configuration, and the profile
//! store.

mod config;
mod profile_store;

pub use config::{Config, NotificationsConfig};
pub use profile_store::{JsonProfileStore, ProfileStore};

use std::path::PathBuf;

/// Returns `~/.config/habitquest[-dev]/`, honoring overrides.
///
/// `HABITQUEST_DATA_DIR` points at an explicit directory (useful for
/// tests); otherwise `HABITQUEST_ENV=dev` switches to the development
/// data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var_os("HABITQUEST_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("HABITQUEST_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("habitquest-dev")
            } else {
                base_dir.join("habitquest")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

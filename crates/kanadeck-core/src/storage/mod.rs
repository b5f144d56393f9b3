mod config;
pub mod database;
pub mod migrations;
pub mod progress;

pub use config::{Config, ContentConfig, StudyConfig};
pub use database::Database;
pub use progress::{keys, MemoryStore, ProgressStore};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/kanadeck[-dev]/` based on KANADECK_ENV.
///
/// Set KANADECK_ENV=dev to use development data directory.
/// KANADECK_DATA_DIR overrides the location entirely.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("KANADECK_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("KANADECK_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("kanadeck-dev")
            } else {
                base_dir.join("kanadeck")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

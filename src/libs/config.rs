//! Configuration management for the zadachnik application.
//!
//! Settings live in a single JSON file in the platform-specific application
//! data directory. Every section is optional: a missing file or a missing
//! section simply means defaults, so the application runs with zero setup.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\zadachnik\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/zadachnik/config.json`
//! - **Linux**: `~/.local/share/lacodda/zadachnik/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use zadachnik::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(storage) = &config.storage {
//!     println!("Tasks are kept in {}", storage.data_file.display());
//! }
//! # anyhow::Ok(())
//! ```

use super::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Task storage configuration.
///
/// Lets the user pin the task list to a specific file, for example a path
/// inside a synchronized folder. When absent, the platform default next to
/// this configuration file is used.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Full path of the JSON file holding the task list.
    pub data_file: PathBuf,
}

/// Main configuration container for the application.
///
/// The `skip_serializing_if` attribute keeps unset sections out of the JSON
/// output, so a default configuration serializes to an empty object and the
/// file stays readable and hand-editable.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Task storage overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error and yields [`Config::default`]. A file
    /// that exists but cannot be read or parsed is reported to the caller:
    /// silently ignoring a corrupt config would make its settings appear to
    /// randomly stop applying.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration with pretty-printed JSON, creating
    /// the application data directory when needed.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }
}

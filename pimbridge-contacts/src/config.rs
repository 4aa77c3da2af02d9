//! Runtime settings for the contacts service, read from `contacts.toml`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::error::ConfigError;

/// Contacts service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ContactsConfig {
    /// Forward the first photo of a saved contact to the photo store.
    #[serde(default = "default_persist_photos")]
    pub persist_photos: bool,
    /// Result cap for finds that do not ask for multiple contacts.
    #[serde(default = "default_single_result_limit")]
    pub single_result_limit: usize,
}

fn default_persist_photos() -> bool {
    true
}

fn default_single_result_limit() -> usize {
    1
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            persist_photos: default_persist_photos(),
            single_result_limit: default_single_result_limit(),
        }
    }
}

/// Raw TOML layout: settings live under a `[contacts]` table.
#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    contacts: ContactsConfig,
}

impl ContactsConfig {
    /// Parses settings from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<ConfigFile>(contents)?.contacts;
        if config.single_result_limit == 0 {
            return Err(ConfigError::Invalid(
                "single-result-limit must be at least 1".into(),
            ));
        }
        Ok(config)
    }

    /// Loads settings from `path`, falling back to defaults when the file is
    /// missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No contacts config at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded contacts config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse contacts config {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read contacts config {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

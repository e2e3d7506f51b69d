// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[network]` - Network name, node endpoint and explorer link template
//! - `[bio]` - Location of the on-chain bio module
//! - `[diagnostics]` - Diagnostics buffer size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` or `COLUMN_WALLET_CONFIG_DIR` (see [`crate::app::paths`])
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use column_wallet::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diagnostics::BufferCapacity;
use crate::domain::wallet::{AccountAddress, ModuleId, TxHash};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when the settings file is unusable.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Network the wallet talks to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    pub name: String,
    pub rpc_url: String,
    /// Transaction page template containing `{hash}`.
    pub explorer_url: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NETWORK_NAME.to_string(),
            rpc_url: DEFAULT_RPC_URL.to_string(),
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
        }
    }
}

impl NetworkConfig {
    /// Explorer page for `hash`.
    #[must_use]
    pub fn explorer_link(&self, hash: &TxHash) -> String {
        self.explorer_url.replace(EXPLORER_HASH_PLACEHOLDER, hash.as_str())
    }
}

/// Location of the bio module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BioConfig {
    pub module_address: String,
    pub module_name: String,
}

impl Default for BioConfig {
    fn default() -> Self {
        Self {
            module_address: DEFAULT_BIO_MODULE_ADDRESS.to_string(),
            module_name: DEFAULT_BIO_MODULE_NAME.to_string(),
        }
    }
}

impl BioConfig {
    /// Parses the configured module location.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the address is malformed or the module
    /// name is empty.
    pub fn module_id(&self) -> Result<ModuleId> {
        let address = AccountAddress::parse(&self.module_address)
            .map_err(|e| Error::Config(format!("bio.module_address: {e}")))?;
        let name = self.module_name.trim();
        if name.is_empty() {
            return Err(Error::Config("bio.module_name is empty".to_string()));
        }
        Ok(ModuleId::new(address, name))
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DiagnosticsConfig {
    /// Number of retained events, clamped to the accepted range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_capacity: Option<usize>,
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        BufferCapacity::from_setting(self.buffer_capacity)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub bio: BioConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Checks values serde cannot validate on its own.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if !self.network.explorer_url.contains(EXPLORER_HASH_PLACEHOLDER) {
            return Err(Error::Config(format!(
                "network.explorer_url must contain {EXPLORER_HASH_PLACEHOLDER}"
            )));
        }
        self.bio.module_id()?;
        Ok(())
    }
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns the config and an optional warning key. A missing file is not a
/// warning; an unreadable or invalid one yields defaults plus
/// [`LOAD_ERROR_KEY`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some(LOAD_ERROR_KEY.to_string())),
            };
        }
    }
    (Config::default(), None)
}

/// Loads and validates configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or holds
/// invalid values.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_target_testnet() {
        let config = Config::default();
        assert_eq!(config.network.name, "testnet");
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            network: NetworkConfig {
                name: "devnet".to_string(),
                rpc_url: "http://127.0.0.1:8080/v1".to_string(),
                explorer_url: "http://localhost/tx/{hash}".to_string(),
            },
            bio: BioConfig::default(),
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(250),
            },
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"LIGHT\"\n").expect("write file");

        let loaded = load_from_path(&path).expect("load should succeed");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.network, NetworkConfig::default());
        assert_eq!(loaded.bio, BioConfig::default());
    }

    #[test]
    fn missing_file_returns_default_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn explorer_template_without_placeholder_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[network]\nexplorer_url = \"https://example.com/tx\"\n")
            .expect("write file");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"sepia\"\n").expect("write file");

        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn explorer_link_embeds_hash() {
        let network = NetworkConfig::default();
        let link = network.explorer_link(&TxHash::new("0xabc123"));
        assert_eq!(
            link,
            "https://explorer.movementnetwork.xyz/txn/0xabc123?network=testnet"
        );
    }

    #[test]
    fn bio_module_id_parses_defaults() {
        let module = BioConfig::default().module_id().expect("valid module");
        assert_eq!(module.name, "onchain_bio");
        assert_eq!(module.address.as_str(), DEFAULT_BIO_MODULE_ADDRESS);

        let broken = BioConfig {
            module_address: "nothex".to_string(),
            module_name: "onchain_bio".to_string(),
        };
        assert!(broken.module_id().is_err());
    }

    #[test]
    fn diagnostics_capacity_is_clamped() {
        let config = DiagnosticsConfig {
            buffer_capacity: Some(1),
        };
        assert_eq!(config.capacity().value(), MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(
            DiagnosticsConfig::default().capacity().value(),
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }
}

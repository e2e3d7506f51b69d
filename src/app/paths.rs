// SPDX-License-Identifier: MPL-2.0
//! Resolution of the settings directory.
//!
//! # Resolution Order
//!
//! 1. **Explicit override**: parameter to [`config_dir_with_override`] (tests)
//! 2. **CLI argument** `--config-dir`, registered via [`init_cli_override`]
//! 3. **Environment variable** `COLUMN_WALLET_CONFIG_DIR`
//! 4. **Platform default** via the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform config directory.
const APP_NAME: &str = "ColumnWallet";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "COLUMN_WALLET_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the `--config-dir` argument. Only the first call has an effect.
pub fn init_cli_override(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

/// Returns the settings directory.
///
/// - Linux: `~/.config/ColumnWallet/`
/// - macOS: `~/Library/Application Support/ColumnWallet/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ColumnWallet\`
///
/// Returns `None` if no directory can be determined.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the settings directory, preferring `override_path` when given.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! This module provides a single source of truth for application data paths,
//! ensuring consistent directory usage across all components.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions
//! 2. **Environment variables** (`ICED_VITRINE_DATA_DIR`, `ICED_VITRINE_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate
//!
//! CLI arguments (`--data-dir`, `--config-dir`) are carried in [`Storage`],
//! which the app threads through every load/save call as the explicit
//! override. Keeping the overrides in a value instead of a global means two
//! app instances in the same process (tests) can point at different
//! directories.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedVitrine";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_VITRINE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_VITRINE_CONFIG_DIR";

/// Directory overrides resolved from CLI flags at startup.
///
/// `None` fields fall back to environment variables and platform defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Storage {
    pub config_dir: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

/// Returns the application data directory path.
///
/// This directory is used for storing application state (the cart snapshot).
/// User preferences are stored separately in the config directory via
/// `config::load/save`.
///
/// # Resolution Order
///
/// 1. `ICED_VITRINE_DATA_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific data directory:
///    - Linux: `~/.local/share/IcedVitrine/`
///    - macOS: `~/Library/Application Support/IcedVitrine/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\IcedVitrine\`
///
/// Returns `None` if the data directory cannot be determined (rare edge case).
pub fn get_data_dir() -> Option<PathBuf> {
    get_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn get_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (CLI flag or test)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_DATA_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application config directory path.
///
/// This directory is used for storing user preferences (settings.toml).
///
/// # Resolution Order
///
/// 1. `ICED_VITRINE_CONFIG_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific config directory:
///    - Linux: `~/.config/IcedVitrine/`
///    - macOS: `~/Library/Application Support/IcedVitrine/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\IcedVitrine\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_config_dir() -> Option<PathBuf> {
    get_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn get_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (CLI flag or test)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn data_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        // Clear env var to test default behavior
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_data_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "data dir should contain app name"
            );
        }
        // If dirs::data_dir() returns None (rare), the test passes silently
    }

    #[test]
    fn config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "config dir should contain app name"
            );
        }
    }

    #[test]
    fn config_dir_is_absolute() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_config_dir() {
            assert!(path.is_absolute(), "config dir should be absolute path");
        }
    }

    #[test]
    fn override_path_takes_precedence_for_data_dir() {
        let override_path = PathBuf::from("/custom/data/path");
        let result = get_data_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_data_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/data/dir";
        std::env::set_var(ENV_DATA_DIR, test_path);

        let result = get_data_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        // Cleanup
        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        // Cleanup
        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        let result = get_data_dir();
        // Should fall back to platform default which contains app name
        if let Some(path) = result {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_data_dir_with_override(Some(override_path.clone()));

        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn storage_default_has_no_overrides() {
        let storage = Storage::default();
        assert_eq!(storage.config_dir, None);
        assert_eq!(storage.data_dir, None);
    }
}

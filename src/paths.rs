// SPDX-License-Identifier: MPL-2.0
//! Preference profile directory resolution.
//!
//! This module is the single source of truth for where disk-backed
//! preference files live, so every component reads and writes the same
//! profile.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to [`preference_dir_with_override`] (for tests and embedding hosts)
//! 2. **Environment variable** (`KILAU_A11Y_CONFIG_DIR`)
//! 3. **Platform default** - via the `dirs` crate, with the application name appended

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "Kilau";

/// Subdirectory holding the accessibility preference files.
const PROFILE_DIR: &str = "a11y";

/// Environment variable to override the preference directory.
pub const ENV_CONFIG_DIR: &str = "KILAU_A11Y_CONFIG_DIR";

/// Returns the preference profile directory path.
///
/// # Resolution Order
///
/// 1. `KILAU_A11Y_CONFIG_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific config directory:
///    - Linux: `~/.config/Kilau/a11y/`
///    - macOS: `~/Library/Application Support/Kilau/a11y/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\Kilau\a11y\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn preference_dir() -> Option<PathBuf> {
    preference_dir_with_override(None)
}

/// Returns the preference profile directory path with an optional override.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`) - most specific, for tests
/// 2. `KILAU_A11Y_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory (with app name appended)
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn preference_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests and embedding hosts)
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
        path.push(PROFILE_DIR);
        path
    })
}

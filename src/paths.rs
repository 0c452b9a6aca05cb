//! Centralized path definitions for brdoc
//!
//! brdoc keeps no state of its own; the only file it reads is the optional
//! user configuration.
//!
//! ```text
//! ~/.config/brdoc/
//! └── config.toml               # Generation defaults
//! ```

use std::path::PathBuf;

/// Global config directory, relative to the home directory
const GLOBAL_DIR: &str = ".config/brdoc";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global brdoc directory.
///
/// Returns `~/.config/brdoc/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.config/brdoc/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

//! Default values for rulestitch configuration.
//!
//! This module provides centralized default locations used across the library
//! and the CLI, ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Environment variable holding extra search roots, separated by the platform
/// path-list separator (`:` on Unix, `;` on Windows).
pub const ROOTS_ENV_VAR: &str = "RULESTITCH_PATH";

/// Environment variable overriding the persisted configuration file location.
pub const CONFIG_ENV_VAR: &str = "RULESTITCH_CONFIG";

/// Returns the built-in default rule directory.
///
/// Uses the platform-appropriate data directory:
/// - Linux: `~/.local/share/rulestitch/rules`
/// - macOS: `~/Library/Application Support/rulestitch/rules`
/// - Windows: `{FOLDERID_RoamingAppData}\rulestitch\rules`
///
/// Falls back to `.rulestitch/rules` in the current directory if the
/// platform data directory cannot be determined.
pub fn default_rules_root() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("rulestitch"))
        .unwrap_or_else(|| PathBuf::from(".rulestitch"))
        .join("rules")
}

/// Returns the default location of the persisted configuration file.
///
/// This can be overridden by the `--config` CLI flag or the
/// `RULESTITCH_CONFIG` environment variable.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("rulestitch"))
        .unwrap_or_else(|| PathBuf::from(".rulestitch"))
        .join("config.yaml")
}

/// Returns the directory new libraries are installed into when no explicit
/// destination is given.
pub fn default_library_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("rulestitch"))
        .unwrap_or_else(|| PathBuf::from(".rulestitch"))
        .join("libraries")
}

//! App-wide constants.
//!
//! Centralises the tool name, config paths and environment variable names
//! so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "dosocs2";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config filename used for the local config.
pub const CONFIG_FILENAME: &str = "dosocs2.conf";

/// Directory name under the config base directory (`~/.config/`).
pub const CONFIG_DIR: &str = "dosocs2";

/// Fallback config base directory, relative to the user's home.
pub const DEFAULT_CONFIG_BASE: &str = ".config";

/// System-wide config file.
pub const GLOBAL_CONFIG_PATH: &str = "/etc/dosocs2.conf";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
pub const ENV_HOME: &str = "HOME";
pub const ENV_CONFIG: &str = "DOSOCS2_CONFIG";
pub const ENV_GLOBAL_CONFIG: &str = "DOSOCS2_GLOBAL_CONFIG";

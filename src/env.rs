//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests use [`Env::mock()`] backed by a `HashMap`, so config parsing and
//! directory resolution never depend on the state of the test process.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::constants::{ENV_HOME, ENV_XDG_CONFIG_HOME};

/// Environment variable reader.
///
/// Wraps lookups so that production code hits `std::env` while tests
/// can supply a controlled set of values.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Look up a variable, treating unset, empty and non-unicode values alike.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name).ok().filter(|v| !v.is_empty())
    }

    /// The user's home directory.
    ///
    /// `$HOME` wins when set. A real environment falls back to the
    /// platform lookup; a mock one has nothing else to consult.
    pub fn home_dir(&self) -> Option<PathBuf> {
        if let Some(home) = self.non_empty(ENV_HOME) {
            return Some(PathBuf::from(home));
        }
        match self.overrides {
            Some(_) => None,
            None => dirs::home_dir(),
        }
    }

    /// Base directory for per-user config files (`$XDG_CONFIG_HOME` or `~/.config`).
    pub fn config_base_dir(&self) -> Option<PathBuf> {
        self.non_empty(ENV_XDG_CONFIG_HOME)
            .map(PathBuf::from)
            .or_else(|| {
                self.home_dir()
                    .map(|home| home.join(crate::constants::DEFAULT_CONFIG_BASE))
            })
    }
}

//! `ConfigStore` and layering logic.
//!
//! Priority (highest to lowest):
//! 1. Local config (`$XDG_CONFIG_HOME/dosocs2/dosocs2.conf`)
//! 2. Global config (`/etc/dosocs2.conf`)
//! 3. Built-in defaults

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::error::ConfigError;
use super::parser::{self, ConfigMap};
use super::template::{DEFAULT_CONFIG, DEFAULT_SOURCE_NAME};
use crate::constants::{CONFIG_DIR, CONFIG_FILENAME, GLOBAL_CONFIG_PATH};
use crate::env::Env;

/// Effective configuration built from defaults, global and local files.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigStore {
    config_home: Option<PathBuf>,
    local_path: PathBuf,
    global_path: PathBuf,
    values: ConfigMap,
    #[serde(skip)]
    env: Env,
}

impl ConfigStore {
    /// Load configuration against the real process environment.
    ///
    /// `None` paths fall back to the standard global and local locations.
    pub fn new(global_path: Option<PathBuf>, local_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::with_env(global_path, local_path, Env::real())
    }

    /// Load configuration, resolving directories and `$(NAME)` tokens through `env`.
    ///
    /// Fails with [`ConfigError::NoConfigHome`] only when the local path has
    /// to be derived and no config directory can be found.
    pub fn with_env(
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
        env: Env,
    ) -> Result<Self, ConfigError> {
        let config_home = env.config_base_dir().map(|base| base.join(CONFIG_DIR));
        let local_path = match (local_path, &config_home) {
            (Some(path), _) => path,
            (None, Some(home)) => home.join(CONFIG_FILENAME),
            (None, None) => return Err(ConfigError::NoConfigHome),
        };
        let global_path = global_path.unwrap_or_else(|| PathBuf::from(GLOBAL_CONFIG_PATH));
        let values = parser::parse_source(DEFAULT_CONFIG, DEFAULT_SOURCE_NAME, &env)?;

        let mut store = Self {
            config_home,
            local_path,
            global_path,
            values,
            env,
        };
        store.update_config()?;
        Ok(store)
    }

    /// Files applied on top of the defaults, lowest precedence first.
    pub fn resolution_order(&self) -> [&Path; 2] {
        [self.global_path.as_path(), self.local_path.as_path()]
    }

    /// Merge each file in [`resolution_order`](Self::resolution_order) into the values.
    ///
    /// Files that cannot be opened are skipped. Bytes that are not valid
    /// UTF-8 are replaced rather than dropping the file. A malformed line in
    /// a file that was read aborts the load.
    pub fn update_config(&mut self) -> Result<(), ConfigError> {
        let paths: Vec<PathBuf> = self
            .resolution_order()
            .iter()
            .map(|p| p.to_path_buf())
            .collect();

        for path in paths {
            let content = match parser::read_config_text(&path) {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(path = %path.display(), "config file not found, skipping");
                    continue;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "could not read config file, skipping");
                    continue;
                }
            };

            let layer = parser::parse_source(&content, &path.display().to_string(), &self.env)?;
            debug!(path = %path.display(), keys = layer.len(), "applied config file");
            self.values.extend(layer);
        }

        Ok(())
    }

    /// Create the config home directory and any missing parents.
    pub fn make_config_dirs(&self) -> Result<(), ConfigError> {
        let home = self.config_home.as_ref().ok_or(ConfigError::NoConfigHome)?;
        match fs::create_dir_all(home) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(ConfigError::CreateDir {
                path: home.clone(),
                source: e,
            }),
        }
    }

    /// Write the default template to the local config path.
    ///
    /// An existing file is only replaced when `overwrite` is set. Returns
    /// whether the file was written. The loaded values are left as they are.
    pub fn create_local_config(&self, overwrite: bool) -> Result<bool, ConfigError> {
        self.make_config_dirs()?;

        if !overwrite && self.local_path.exists() {
            debug!(path = %self.local_path.display(), "local config exists, keeping it");
            return Ok(false);
        }

        fs::write(&self.local_path, DEFAULT_CONFIG).map_err(|e| ConfigError::WriteFile {
            path: self.local_path.clone(),
            source: e,
        })?;
        info!(path = %self.local_path.display(), "wrote default config");
        Ok(true)
    }

    /// Write every value as `key = value`, one per line, sorted by key.
    pub fn dump_to_file<W: Write>(&self, mut writer: W) -> Result<(), ConfigError> {
        for (key, value) in &self.values {
            writeln!(writer, "{key} = {value}").map_err(|e| ConfigError::Write { source: e })?;
        }
        writer.flush().map_err(|e| ConfigError::Write { source: e })
    }

    /// Look up a single value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Split a comma-separated value (e.g. `default_scanners`) into its items.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn values(&self) -> &ConfigMap {
        &self.values
    }

    /// `None` when neither `XDG_CONFIG_HOME` nor a home directory is known.
    pub fn config_home(&self) -> Option<&Path> {
        self.config_home.as_deref()
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn global_path(&self) -> &Path {
        &self.global_path
    }
}

use std::path::PathBuf;
use thiserror::Error;

/// Errors during config loading and writing.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{source_name}:{line_number}: expected `key = value`, found {line:?}")]
    MalformedLine {
        source_name: String,
        line_number: usize,
        line: String,
    },

    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write configuration: {source}")]
    Write { source: std::io::Error },

    #[error("could not determine config directory (neither XDG_CONFIG_HOME nor HOME is set)")]
    NoConfigHome,
}

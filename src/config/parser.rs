//! `key = value` config file parser.
//!
//! One pair per line. Blank lines and lines starting with `#` are skipped,
//! and `$(NAME)` tokens in values are replaced from the environment.

use std::collections::BTreeMap;
use std::path::Path;

use regex::{Captures, Regex};

use super::error::ConfigError;
use crate::env::Env;

/// Flat mapping from config key to value.
pub type ConfigMap = BTreeMap<String, String>;

static INTERPOLATION_RE: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\$\((.*?)\)").unwrap());

/// Parse config text. Later occurrences of a key replace earlier ones.
pub fn parse(input: &str, env: &Env) -> Result<ConfigMap, ConfigError> {
    parse_source(input, "<input>", env)
}

/// Parse config text, naming `source_name` in malformed-line errors.
pub fn parse_source(input: &str, source_name: &str, env: &Env) -> Result<ConfigMap, ConfigError> {
    let mut values = ConfigMap::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ConfigError::MalformedLine {
                source_name: source_name.to_string(),
                line_number: idx + 1,
                line: line.to_string(),
            });
        };

        values.insert(key.trim().to_string(), interpolate(value.trim(), env));
    }

    Ok(values)
}

/// Read and parse a single config file.
pub fn parse_file(path: &Path, env: &Env) -> Result<ConfigMap, ConfigError> {
    let content = read_config_text(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_source(&content, &path.display().to_string(), env)
}

/// Read a config file as text. Invalid UTF-8 is replaced, not rejected.
pub fn read_config_text(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Replace every `$(NAME)` in `value` with `$NAME`, or nothing when unset or empty.
pub fn interpolate(value: &str, env: &Env) -> String {
    INTERPOLATION_RE
        .replace_all(value, |caps: &Captures| env.non_empty(&caps[1]).unwrap_or_default())
        .into_owned()
}

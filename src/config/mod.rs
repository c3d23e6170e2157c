//! Configuration loading and layering.
//!
//! Handles `dosocs2.conf` parsing, `$(NAME)` interpolation, and merging of
//! built-in defaults with the global and local config files.

pub mod error;
pub mod parser;
pub mod store;
pub mod template;

pub use error::ConfigError;
pub use parser::ConfigMap;
pub use store::ConfigStore;

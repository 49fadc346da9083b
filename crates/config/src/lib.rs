//! Configuration file support for graphql-fields.
//!
//! A `.graphql-fields.yml`, `.graphql-fields.yaml` or `.graphql-fields.json`
//! file found next to (or above) a document supplies default excluded fields
//! and variable values.

mod config;
mod loader;

pub use config::FieldsConfig;
pub use loader::{find_config, load_config, load_config_from_str};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config at {}: {message}", .path.display())]
    Invalid { path: PathBuf, message: String },

    #[error("Unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

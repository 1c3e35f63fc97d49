//! Project configuration.
//!
//! A project describes its styles and markup in `tenoxui.config.json`:
//!
//! ```json
//! {
//!   "inputStyles": { ".card": { "padding": "1rem" } },
//!   "inputFiles": "src/**/*.html",
//!   "outputStyles": "dist/styles.js"
//! }
//! ```
//!
//! The configuration is read once at startup and handed to whatever runs
//! the scan; nothing reloads it during a watch session.

use crate::styles::StyleMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when no other path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tenoxui.config.json";

/// Ways loading the configuration can fail.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: '{0}'")]
    NotFound(PathBuf),

    #[error("failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Inputs and output of a style extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Every style the project could use, keyed by selector.
    pub input_styles: StyleMap,

    /// Glob matching the markup files to scan and watch.
    pub input_files: String,

    /// Where the generated module is written.
    pub output_styles: PathBuf,
}

impl Config {
    /// Loads the configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        Self::from_json_str(&text)
    }

    /// Parses configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

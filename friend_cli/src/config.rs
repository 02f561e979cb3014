//! CLI configuration, read from an optional TOML file.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::output::DEFAULT_FILENAME;

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Seed file used when the file prompt is answered with an empty line.
    pub default_file: PathBuf,

    /// Print the command summary before every prompt.
    pub show_help: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from(DEFAULT_FILENAME),
            show_help: true,
        }
    }
}

impl CliConfig {
    /// Read a configuration file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| CliError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        toml::from_str(&text).map_err(|err| CliError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}

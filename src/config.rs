use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{HoursError, Result};

/// Runtime settings for the `outlet-hours` binary.
///
/// Read from a JSON file. Every field is optional and command line flags win
/// over the file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON file holding a list of outlets.
    pub input: Option<PathBuf>,
    /// Where to write the records. Standard output when absent.
    pub output: Option<PathBuf>,
    pub pretty: bool,
    /// `tracing_subscriber::EnvFilter` directive, `RUST_LOG` takes precedence.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            pretty: false,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_config(config: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(config)?;
        if config.log_filter.trim().is_empty() {
            return Err(HoursError::Config("log_filter must not be empty.".to_string()));
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config = std::fs::read_to_string(path)
            .map_err(|err| HoursError::io(path.display().to_string(), err))?;
        Self::from_config(&config)
    }
}

//! core::config
//!
//! Configuration file handling.
//!
//! # Location
//!
//! Configuration is read from `pingen.toml` in the working directory, or
//! from the path given with `--config`. A missing file means defaults.
//!
//! # Precedence
//!
//! CLI flag > config file > built-in default. Resolution happens in the
//! CLI layer; this module only parses and validates.
//!
//! # Example
//!
//! ```toml
//! count = 100000
//!
//! [stores]
//! used = "used-numbers.json"
//! barred = "barred-numbers.json"
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default config file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILENAME: &str = "pingen.toml";

/// Default used-number store path.
pub const DEFAULT_USED_STORE: &str = "used-numbers.json";

/// Default barred-number store path.
pub const DEFAULT_BARRED_STORE: &str = "barred-numbers.json";

/// Default number of PINs for the generate command.
pub const DEFAULT_GENERATE_COUNT: u64 = 100_000;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("cannot read config file {}: {}", .path.display(), .source)]
    Io {
        /// Path of the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be parsed as TOML of the expected shape.
    #[error("cannot parse config file {}: {}", .path.display(), .reason)]
    Parse {
        /// Path of the config file
        path: PathBuf,
        /// Parser diagnostic
        reason: String,
    },

    /// A config value is invalid.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Parsed configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default PIN count for the generate command
    pub count: Option<u64>,

    /// Store path overrides
    pub stores: Option<StoresConfig>,
}

/// Store path configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StoresConfig {
    /// Used-number store path
    pub used: Option<PathBuf>,

    /// Barred-number store path
    pub barred: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the given path.
    ///
    /// Returns `Ok(None)` when the file does not exist; callers decide
    /// whether that deserves a warning (it does when the path was given
    /// explicitly).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown fields,
    /// and `ConfigError::InvalidValue` for values that parse but are
    /// unusable.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(Some(config))
    }

    /// Validate the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(stores) = &self.stores {
            if matches!(&stores.used, Some(p) if p.as_os_str().is_empty()) {
                return Err(ConfigError::InvalidValue(
                    "stores.used cannot be empty".to_string(),
                ));
            }
            if matches!(&stores.barred, Some(p) if p.as_os_str().is_empty()) {
                return Err(ConfigError::InvalidValue(
                    "stores.barred cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Configured used-number store path, if any.
    pub fn used_store(&self) -> Option<&Path> {
        self.stores.as_ref()?.used.as_deref()
    }

    /// Configured barred-number store path, if any.
    pub fn barred_store(&self) -> Option<&Path> {
        self.stores.as_ref()?.barred.as_deref()
    }
}

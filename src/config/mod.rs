//! Table configuration
//!
//! Read from a `symtab.toml` file; every key is optional.
//!
//! ```toml
//! fold_case = true
//! clear_resets_counters = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default config file name looked up by the CLI
pub const CONFIG_FILE_NAME: &str = "symtab.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Treat names that differ only in ASCII case as the same key
    pub fold_case: bool,
    /// Reset probe and hit counters along with the entries on `clear`
    pub clear_resets_counters: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            fold_case: false,
            clear_resets_counters: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl TableConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded table configuration from {}", path.display());
        Self::from_toml_str(&text)
    }
}

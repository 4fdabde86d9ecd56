//! Store configuration module.
//!
//! Provides the location of the persisted tournament document.

use std::env;
use std::path::PathBuf;

/// Default document name, next to the working directory.
const DEFAULT_DATA_FILE: &str = "beach_volley_data.json";

/// Store configuration
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Path of the persisted tournament document
    pub data_file: PathBuf,
}

impl StoreConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `BEACH_VOLLEY_DATA_FILE`: document path (default:
    ///   `beach_volley_data.json`)
    pub fn from_env() -> Self {
        Self {
            data_file: env::var("BEACH_VOLLEY_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE)),
        }
    }

    /// Create a configuration pointing at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            data_file: path.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

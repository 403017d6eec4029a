//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the
//! session; the core never reads environment variables or command-line
//! arguments while handling an operation.

use crate::constants::DEFAULT_DATA_FILE;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_file: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` with an explicit roster file path.
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    /// Path of the flat file the roster is saved to and loaded from.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_DATA_FILE))
    }
}

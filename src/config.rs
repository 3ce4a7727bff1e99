//! Configuration for btserial
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{BtSerialError, Result};
use crate::protocol::{ELLIPSIS, SUMMARY_MAX_LEN, TERMINATOR};

/// Main configuration for the btserial tools
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Summary Configuration
    // -------------------------------------------------------------------------
    /// Maximum rendered summary length, terminator included
    pub summary_max_len: usize,

    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub log_filter: String,

    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// Where the CLI saves and loads a bundle blob
    pub bundle_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_max_len: SUMMARY_MAX_LEN,
            log_filter: "warn,btserial=info".to_string(),
            bundle_path: PathBuf::from("./btserial_action.bundle"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the summary limit leaves room for the ellipsis and terminator
    pub fn validate(&self) -> Result<()> {
        let reserved = ELLIPSIS.chars().count() + TERMINATOR.chars().count();
        if self.summary_max_len < reserved {
            return Err(BtSerialError::Config(format!(
                "summary_max_len must be at least {}, got {}",
                reserved, self.summary_max_len
            )));
        }
        if self.log_filter.trim().is_empty() {
            return Err(BtSerialError::Config("log_filter is empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the maximum summary length (terminator included)
    pub fn summary_max_len(mut self, len: usize) -> Self {
        self.config.summary_max_len = len;
        self
    }

    /// Set the fallback log filter directive
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    /// Set the bundle file location
    pub fn bundle_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.bundle_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

//! Configuration for stocktake
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, StockError};

/// Main configuration for a stocktake instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the JSON document holding the whole inventory.
    /// A missing file is treated as an empty inventory.
    pub inventory_path: PathBuf,

    /// Save the inventory after every mutating command
    pub autosave: bool,

    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// Number of spaces used to indent the JSON document
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from("inventory.json"),
            autosave: true,
            indent: 4,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the config can be used to open an engine
    pub fn validate(&self) -> Result<()> {
        if self.inventory_path.as_os_str().is_empty() {
            return Err(StockError::Config("inventory path is empty".to_string()));
        }
        if self.inventory_path.file_name().is_none() {
            return Err(StockError::Config(format!(
                "inventory path {} does not name a file",
                self.inventory_path.display()
            )));
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
    /// Set the inventory file path
    pub fn inventory_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.inventory_path = path.into();
        self
    }

    /// Enable or disable saving after every mutating command
    pub fn autosave(mut self, enabled: bool) -> Self {
        self.config.autosave = enabled;
        self
    }

    /// Set the JSON indent width (in spaces)
    pub fn indent(mut self, width: usize) -> Self {
        self.config.indent = width;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

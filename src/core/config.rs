//! Comparison configuration with documented defaults
//!
//! Values can be loaded from a TOML file; anything the file leaves out
//! falls back to the defaults below.

use crate::core::error::{DinoError, Result};
use crate::core::types::DietMatching;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the bundled catalog
pub const DEFAULT_CATALOG_LOCATION: &str = "data/dino.json";

/// Top-level field of the catalog document holding the records
pub const DEFAULT_CATALOG_FIELD: &str = "Dinos";

/// Configuration for loading the catalog and rendering tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    // === CATALOG ===
    /// File path or http(s) URL of the catalog document
    pub catalog_location: String,

    /// Name of the JSON field holding the record array
    pub catalog_field: String,

    /// Species whose tile always shows the stored fact
    ///
    /// Applied at load time on top of any `alwaysShowFact` flag the
    /// record carries itself.
    pub always_show_fact_species: Vec<String>,

    // === RENDERING ===
    /// Zero-based grid slot for the human tile
    ///
    /// With the default of 4 the grid reads: four dinosaurs, the human,
    /// then the remaining dinosaurs.
    pub human_tile_position: usize,

    /// Image key used for the human tile
    pub human_image_key: String,

    /// Directory prefix for tile images
    pub image_dir: String,

    // === COMPARISON ===
    /// How diet labels are compared
    pub diet_matching: DietMatching,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            catalog_location: DEFAULT_CATALOG_LOCATION.into(),
            catalog_field: DEFAULT_CATALOG_FIELD.into(),
            always_show_fact_species: vec!["Pigeon".into()],
            human_tile_position: 4,
            human_image_key: "human".into(),
            image_dir: "images".into(),
            diet_matching: DietMatching::Exact,
        }
    }
}

impl CompareConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: CompareConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.catalog_location.trim().is_empty() {
            return Err(DinoError::Config("catalog_location must not be empty".into()));
        }

        if self.catalog_field.trim().is_empty() {
            return Err(DinoError::Config("catalog_field must not be empty".into()));
        }

        if self.human_image_key.trim().is_empty() {
            return Err(DinoError::Config("human_image_key must not be empty".into()));
        }

        Ok(())
    }
}

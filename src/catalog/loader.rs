//! Load the dinosaur catalog from a JSON document
//!
//! `CatalogLoader` turns the document into a `Catalog`, skipping records
//! that cannot become a `Dinosaur` and logging why. The async `load`
//! entry point accepts either a file path or an http(s) URL.

use crate::catalog::schema::RawDinosaur;
use crate::catalog::Catalog;
use crate::core::config::CompareConfig;
use crate::core::error::{DinoError, Result};
use crate::entity::Dinosaur;
use reqwest::Client;
use serde_json::Value;
use std::path::Path;

/// Loader that converts catalog documents into a `Catalog`
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    field: String,
    always_show_fact_species: Vec<String>,
    client: Client,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new(&CompareConfig::default())
    }
}

impl CatalogLoader {
    /// Create a loader using the catalog settings from `config`
    pub fn new(config: &CompareConfig) -> Self {
        Self {
            field: config.catalog_field.clone(),
            always_show_fact_species: config.always_show_fact_species.clone(),
            client: Client::new(),
        }
    }

    /// Use `client` for http(s) locations instead of the default one
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Load a catalog from a JSON string
    pub fn load_from_json(&self, json: &str) -> Result<Catalog> {
        let document: Value = serde_json::from_str(json)?;

        let records = document
            .get(&self.field)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                DinoError::CatalogUnavailable(format!("document has no \"{}\" array", self.field))
            })?;

        let mut dinosaurs = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            match self.convert_record(index, record) {
                Ok(dino) => dinosaurs.push(dino),
                Err(e) => tracing::warn!("Skipping catalog record: {}", e),
            }
        }

        if dinosaurs.is_empty() {
            return Err(DinoError::CatalogUnavailable(format!(
                "no usable records in \"{}\" ({} found)",
                self.field,
                records.len()
            )));
        }

        tracing::info!(
            loaded = dinosaurs.len(),
            skipped = records.len() - dinosaurs.len(),
            "Catalog loaded"
        );
        Ok(Catalog::new(dinosaurs))
    }

    /// Load a catalog from a JSON file on disk
    pub fn load_from_file(&self, path: &Path) -> Result<Catalog> {
        let content = std::fs::read_to_string(path)?;
        self.load_from_json(&content)
    }

    /// Fetch and load a catalog from a file path or http(s) URL
    pub async fn load(&self, location: &str) -> Result<Catalog> {
        tracing::debug!(location, "Fetching catalog");
        let content = if is_remote(location) {
            self.client
                .get(location)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?
        } else {
            tokio::fs::read_to_string(location).await?
        };
        self.load_from_json(&content)
    }

    fn convert_record(&self, index: usize, record: &Value) -> Result<Dinosaur> {
        let raw: RawDinosaur =
            serde_json::from_value(record.clone()).map_err(|e| DinoError::MalformedRecord {
                index,
                reason: e.to_string(),
            })?;

        let mut dino = Dinosaur::from_record(index, raw)?;
        if self.always_show_fact_species.iter().any(|s| *s == dino.species) {
            dino.always_show_fact = true;
        }
        Ok(dino)
    }
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Load a catalog with the default loader settings
pub async fn load_catalog(location: &str) -> Result<Catalog> {
    CatalogLoader::default().load(location).await
}

/// Synchronously load a catalog file with the default loader settings
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    CatalogLoader::default().load_from_file(path)
}

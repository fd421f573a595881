//! The dinosaur catalog: loading, schema and load state

pub mod loader;
pub mod schema;
pub mod state;

pub use loader::{load_catalog, load_catalog_file, CatalogLoader};
pub use schema::RawDinosaur;
pub use state::{CatalogCell, CatalogPublisher, LoadState};

use crate::core::error::Result;
use crate::entity::Dinosaur;

/// Ordered, read-only collection of dinosaurs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    dinosaurs: Vec<Dinosaur>,
}

impl Catalog {
    pub fn new(dinosaurs: Vec<Dinosaur>) -> Self {
        Self { dinosaurs }
    }

    /// Parse a catalog document using the default loader settings
    pub fn from_json(json: &str) -> Result<Self> {
        CatalogLoader::default().load_from_json(json)
    }

    pub fn dinosaurs(&self) -> &[Dinosaur] {
        &self.dinosaurs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dinosaur> {
        self.dinosaurs.iter()
    }

    pub fn len(&self) -> usize {
        self.dinosaurs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dinosaurs.is_empty()
    }

    /// Look up a dinosaur by exact species name
    pub fn find(&self, species: &str) -> Option<&Dinosaur> {
        self.dinosaurs.iter().find(|d| d.species == species)
    }
}

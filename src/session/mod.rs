//! One compare / compare-again cycle
//!
//! The session owns the form being filled in and the last rendered grid.
//! Comparing requires a ready catalog; a successful comparison clears the
//! form, and `reset` drops the grid so the next round starts clean.

use crate::catalog::CatalogCell;
use crate::core::config::CompareConfig;
use crate::core::error::Result;
use crate::entity::{Dinosaur, Human, HumanForm};
use crate::tiles::{render_grid, Tile, TileSettings};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// The result of one comparison round
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub round: u32,
    pub human: Human,
    pub tiles: Vec<Tile>,
}

pub struct CompareSession {
    catalog: CatalogCell,
    settings: TileSettings,
    rng: ChaCha8Rng,
    form: HumanForm,
    grid: Option<Comparison>,
    rounds: u32,
}

impl CompareSession {
    /// Create a session; `seed` makes fact selection reproducible
    pub fn new(catalog: CatalogCell, config: &CompareConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            catalog,
            settings: TileSettings::from(config),
            rng,
            form: HumanForm::default(),
            grid: None,
            rounds: 0,
        }
    }

    /// Whether the compare action may be triggered
    pub fn can_compare(&self) -> bool {
        self.catalog.is_ready()
    }

    pub fn form(&self) -> &HumanForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut HumanForm {
        &mut self.form
    }

    pub fn grid(&self) -> Option<&Comparison> {
        self.grid.as_ref()
    }

    /// Compare the current form against the catalog
    ///
    /// Fails with `CatalogNotReady` while the catalog is still loading.
    /// Invalid form input leaves the form untouched so it can be fixed.
    pub fn compare(&mut self) -> Result<&Comparison> {
        let catalog = self.catalog.current()?;
        self.compare_against(catalog.dinosaurs())
    }

    /// Like `compare`, but waits for the catalog load to finish first
    pub async fn compare_when_ready(&mut self) -> Result<&Comparison> {
        let catalog = self.catalog.wait().await?;
        self.compare_against(catalog.dinosaurs())
    }

    fn compare_against(&mut self, dinosaurs: &[Dinosaur]) -> Result<&Comparison> {
        let human = self.form.parse()?;
        let tiles = render_grid(dinosaurs, &human, &mut self.rng, &self.settings);

        self.rounds += 1;
        tracing::info!(
            round = self.rounds,
            name = %human.name,
            tiles = tiles.len(),
            "Rendered comparison"
        );

        self.form.clear();
        Ok(&*self.grid.insert(Comparison {
            round: self.rounds,
            human,
            tiles,
        }))
    }

    /// Clear the grid and form for another round
    pub fn reset(&mut self) {
        self.grid = None;
        self.form.clear();
    }
}

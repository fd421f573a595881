//! Tile grid assembly
//!
//! The grid lists the first few dinosaurs, then the human, then the
//! remaining dinosaurs. Each entry becomes a `Tile` with a label, an
//! image key and an optional statement.

use crate::core::config::CompareConfig;
use crate::core::types::{DietMatching, TileKind};
use crate::entity::{Dinosaur, Human};
use crate::facts::{select_fact, FactKind};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Grid slot taken by the human when nothing else is configured
pub const HUMAN_TILE_POSITION: usize = 4;

/// One entry of the grid before rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileEntry<'a> {
    Dinosaur(&'a Dinosaur),
    Human(&'a Human),
}

impl<'a> TileEntry<'a> {
    pub fn kind(&self) -> TileKind {
        match self {
            TileEntry::Dinosaur(_) => TileKind::Dinosaur,
            TileEntry::Human(_) => TileKind::Human,
        }
    }

    /// Species for dinosaurs, the person's name for the human
    pub fn label(&self) -> &'a str {
        match *self {
            TileEntry::Dinosaur(dino) => &dino.species,
            TileEntry::Human(human) => &human.name,
        }
    }
}

/// Rendering knobs taken from `CompareConfig`
#[derive(Debug, Clone, PartialEq)]
pub struct TileSettings {
    pub human_tile_position: usize,
    pub human_image_key: String,
    pub diet_matching: DietMatching,
}

impl Default for TileSettings {
    fn default() -> Self {
        Self::from(&CompareConfig::default())
    }
}

impl From<&CompareConfig> for TileSettings {
    fn from(config: &CompareConfig) -> Self {
        Self {
            human_tile_position: config.human_tile_position,
            human_image_key: config.human_image_key.clone(),
            diet_matching: config.diet_matching,
        }
    }
}

/// A display-ready grid cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub label: String,
    pub image_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fact_kind: Option<FactKind>,
}

impl Tile {
    /// Whether the statement line should be shown at all
    pub fn fact_visible(&self) -> bool {
        self.fact.as_deref().is_some_and(|f| !f.is_empty())
    }

    pub fn image_path(&self, image_dir: &str) -> String {
        format!("{}/{}.png", image_dir.trim_end_matches('/'), self.image_key)
    }
}

/// First four dinosaurs, the human, then the rest
pub fn build_tile_order<'a>(dinosaurs: &'a [Dinosaur], human: &'a Human) -> Vec<TileEntry<'a>> {
    build_tile_order_at(dinosaurs, human, HUMAN_TILE_POSITION)
}

/// Like `build_tile_order` with the human at `position`
///
/// A position past the end of the catalog puts the human last.
pub fn build_tile_order_at<'a>(
    dinosaurs: &'a [Dinosaur],
    human: &'a Human,
    position: usize,
) -> Vec<TileEntry<'a>> {
    let split = position.min(dinosaurs.len());
    let (head, tail) = dinosaurs.split_at(split);

    let mut entries = Vec::with_capacity(dinosaurs.len() + 1);
    entries.extend(head.iter().map(TileEntry::Dinosaur));
    entries.push(TileEntry::Human(human));
    entries.extend(tail.iter().map(TileEntry::Dinosaur));
    entries
}

pub fn render_tile(
    entry: &TileEntry<'_>,
    human: &Human,
    rng: &mut impl Rng,
    settings: &TileSettings,
) -> Tile {
    let image_key = match entry {
        TileEntry::Dinosaur(dino) => dino.image_key(),
        TileEntry::Human(_) => settings.human_image_key.clone(),
    };
    let outcome = select_fact(entry, human, rng, settings.diet_matching);

    Tile {
        kind: entry.kind(),
        label: entry.label().to_string(),
        image_key,
        fact_kind: outcome.as_ref().map(|o| o.kind),
        fact: outcome.map(|o| o.text),
    }
}

/// Order and render the whole grid
pub fn render_grid(
    dinosaurs: &[Dinosaur],
    human: &Human,
    rng: &mut impl Rng,
    settings: &TileSettings,
) -> Vec<Tile> {
    build_tile_order_at(dinosaurs, human, settings.human_tile_position)
        .iter()
        .map(|entry| render_tile(entry, human, rng, settings))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn dinos(n: usize) -> Vec<Dinosaur> {
        (0..n)
            .map(|i| Dinosaur {
                species: format!("Dino{}", i),
                weight: 1000.0 * (i + 1) as f64,
                height: 50.0 + i as f64,
                diet: "carnivore".into(),
                fact: format!("fact {}", i),
                r#where: "Somewhere".into(),
                when: "Jurassic".into(),
                always_show_fact: false,
            })
            .collect()
    }

    fn alex() -> Human {
        Human::new("Alex", 5.0, 6.0, 150.0, "herbivore")
    }

    #[test]
    fn test_order_with_six_dinosaurs() {
        let dinos = dinos(6);
        let human = alex();
        let labels: Vec<_> = build_tile_order(&dinos, &human)
            .iter()
            .map(|e| e.label())
            .collect();

        assert_eq!(
            labels,
            vec!["Dino0", "Dino1", "Dino2", "Dino3", "Alex", "Dino4", "Dino5"]
        );
    }

    #[test]
    fn test_order_with_short_catalog_puts_human_last() {
        let dinos = dinos(2);
        let human = alex();
        let order = build_tile_order(&dinos, &human);
        assert_eq!(order.len(), 3);
        assert_eq!(order[2], TileEntry::Human(&human));
    }

    #[test]
    fn test_order_at_custom_position() {
        let dinos = dinos(3);
        let human = alex();
        let order = build_tile_order_at(&dinos, &human, 0);
        assert_eq!(order[0].kind(), TileKind::Human);
        assert_eq!(order[1].label(), "Dino0");
    }

    #[test]
    fn test_human_tile() {
        let human = alex();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let tile = render_tile(
            &TileEntry::Human(&human),
            &human,
            &mut rng,
            &TileSettings::default(),
        );

        assert_eq!(tile.kind, TileKind::Human);
        assert_eq!(tile.label, "Alex");
        assert_eq!(tile.image_key, "human");
        assert!(tile.fact.is_none());
        assert!(!tile.fact_visible());
        assert_eq!(tile.image_path("images"), "images/human.png");
    }

    #[test]
    fn test_dinosaur_tile() {
        let mut dinos = dinos(1);
        dinos[0].species = "Tyrannosaurus Rex".into();
        let human = alex();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let tile = render_tile(
            &TileEntry::Dinosaur(&dinos[0]),
            &human,
            &mut rng,
            &TileSettings::default(),
        );

        assert_eq!(tile.label, "Tyrannosaurus Rex");
        assert_eq!(tile.image_key, "tyrannosaurus rex");
        assert!(tile.fact_visible());
        assert!(tile.fact_kind.is_some());
    }

    #[test]
    fn test_empty_fact_is_hidden() {
        let mut dinos = dinos(1);
        dinos[0].fact = String::new();
        dinos[0].always_show_fact = true;
        let human = alex();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let tile = render_tile(
            &TileEntry::Dinosaur(&dinos[0]),
            &human,
            &mut rng,
            &TileSettings::default(),
        );
        assert!(!tile.fact_visible());
    }

    #[test]
    fn test_render_grid_is_reproducible_with_seed() {
        let dinos = dinos(8);
        let human = alex();
        let settings = TileSettings::default();

        let a = render_grid(&dinos, &human, &mut ChaCha8Rng::seed_from_u64(11), &settings);
        let b = render_grid(&dinos, &human, &mut ChaCha8Rng::seed_from_u64(11), &settings);

        assert_eq!(a.len(), 9);
        assert_eq!(a, b);
        assert_eq!(a[4].kind, TileKind::Human);
    }

    #[test]
    fn test_settings_from_config() {
        let config = CompareConfig {
            human_tile_position: 1,
            human_image_key: "person".into(),
            diet_matching: DietMatching::IgnoreCase,
            ..CompareConfig::default()
        };
        let settings = TileSettings::from(&config);
        assert_eq!(settings.human_tile_position, 1);
        assert_eq!(settings.human_image_key, "person");
        assert_eq!(settings.diet_matching, DietMatching::IgnoreCase);
    }
}

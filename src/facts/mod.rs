//! Fact selection for a single tile
//!
//! Each dinosaur tile shows one of six statements, drawn uniformly at
//! random. Records flagged `always_show_fact` skip the draw and show
//! their stored fact; the human tile shows nothing.

use crate::compare::{compare_diet, compare_height, compare_weight};
use crate::core::types::DietMatching;
use crate::entity::{Dinosaur, Human};
use crate::tiles::TileEntry;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The six statements a dinosaur tile can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactKind {
    Weight,
    Height,
    Diet,
    Fact,
    Habitat,
    Era,
}

impl FactKind {
    pub const ALL: [FactKind; 6] = [
        FactKind::Weight,
        FactKind::Height,
        FactKind::Diet,
        FactKind::Fact,
        FactKind::Habitat,
        FactKind::Era,
    ];

    /// Uniform draw over all six kinds
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// The statement this kind produces for `dino` against `human`
    pub fn statement(&self, dino: &Dinosaur, human: &Human, matching: DietMatching) -> String {
        match self {
            FactKind::Weight => compare_weight(dino, human),
            FactKind::Height => compare_height(dino, human),
            FactKind::Diet => compare_diet(dino, human, matching),
            FactKind::Fact => dino.fact.clone(),
            FactKind::Habitat => format!("The {} lived in {}.", dino.species, dino.r#where),
            FactKind::Era => format!("The {} lived in the {} era.", dino.species, dino.when),
        }
    }
}

/// A chosen statement and the kind it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactOutcome {
    pub kind: FactKind,
    pub text: String,
}

/// Pick the statement shown on `entry`'s tile, or `None` for the human
pub fn select_fact(
    entry: &TileEntry<'_>,
    human: &Human,
    rng: &mut impl Rng,
    matching: DietMatching,
) -> Option<FactOutcome> {
    let dino = match entry {
        TileEntry::Human(_) => return None,
        TileEntry::Dinosaur(dino) => *dino,
    };

    let kind = if dino.always_show_fact {
        FactKind::Fact
    } else {
        FactKind::random(rng)
    };
    tracing::debug!(species = %dino.species, ?kind, "Selected fact");

    Some(FactOutcome {
        kind,
        text: kind.statement(dino, human, matching),
    })
}

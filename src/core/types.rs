//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// How two diet labels are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietMatching {
    /// Byte-for-byte equality ("Carnivore" != "carnivore")
    #[default]
    Exact,
    /// Equality after lowercasing both sides
    IgnoreCase,
}

impl DietMatching {
    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            DietMatching::Exact => a == b,
            DietMatching::IgnoreCase => a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// What a tile stands for in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Dinosaur,
    Human,
}

/// Round to one decimal place, the precision every ratio is reported at
///
/// Goes through the `{:.1}` rendering so the value always agrees with the
/// printed digits. Scaling by ten first would round twice and push values
/// stored just below a half (0.15 is 0.1499...) up instead of down.
pub fn round_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

//! JSON schema types for the dinosaur catalog document
//!
//! The document is an object with one named field (normally `"Dinos"`)
//! holding an array of records. Every record field is optional here;
//! `Dinosaur::from_record` decides which ones are required.

use serde::{Deserialize, Serialize};

/// A single record as it appears in the catalog document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawDinosaur {
    #[serde(default)]
    pub species: Option<String>,
    /// Weight in pounds
    #[serde(default)]
    pub weight: Option<f64>,
    /// Height in inches
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub fact: Option<String>,
    #[serde(default)]
    pub r#where: Option<String>,
    #[serde(default)]
    pub when: Option<String>,
    /// Per-record override: always show `fact` on this tile
    #[serde(default, rename = "alwaysShowFact")]
    pub always_show_fact: Option<bool>,
}

//! Dinosaur records as loaded from the catalog

use crate::catalog::schema::RawDinosaur;
use crate::core::error::{DinoError, Result};
use serde::{Deserialize, Serialize};

/// One catalog entry. Weight is in pounds, height in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dinosaur {
    pub species: String,
    pub weight: f64,
    pub height: f64,
    pub diet: String,
    pub fact: String,
    pub r#where: String,
    pub when: String,
    /// Tile always shows `fact` instead of a random statement
    #[serde(default)]
    pub always_show_fact: bool,
}

impl Dinosaur {
    /// Build a dinosaur from a raw catalog record
    ///
    /// `index` is the record's position in the source document and is
    /// only used for error reporting. Species, weight and height are
    /// required; missing text fields fall back to empty strings.
    pub fn from_record(index: usize, raw: RawDinosaur) -> Result<Self> {
        let malformed = |reason: &str| DinoError::MalformedRecord {
            index,
            reason: reason.to_string(),
        };

        let species = raw
            .species
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| malformed("missing species"))?;

        let weight = raw.weight.ok_or_else(|| malformed("missing weight"))?;
        if !(weight.is_finite() && weight > 0.0) {
            return Err(malformed("weight must be a positive number"));
        }

        let height = raw.height.ok_or_else(|| malformed("missing height"))?;
        if !(height.is_finite() && height > 0.0) {
            return Err(malformed("height must be a positive number"));
        }

        let text = |value: Option<String>, field: &str| {
            value.unwrap_or_else(|| {
                tracing::warn!(
                    index,
                    %species,
                    field,
                    "Record is missing a text field, using empty string"
                );
                String::new()
            })
        };

        let diet = text(raw.diet, "diet");
        let fact = text(raw.fact, "fact");
        let r#where = text(raw.r#where, "where");
        let when = text(raw.when, "when");

        Ok(Self {
            species,
            weight,
            height,
            diet,
            fact,
            r#where,
            when,
            always_show_fact: raw.always_show_fact.unwrap_or(false),
        })
    }

    /// Key used to look up the tile image ("Tyrannosaurus Rex" -> "tyrannosaurus rex")
    pub fn image_key(&self) -> String {
        self.species.to_lowercase()
    }
}

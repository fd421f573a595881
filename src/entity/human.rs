//! The human side of a comparison, built from form input

use crate::core::error::{DinoError, Result};
use crate::core::types::round_tenth;
use serde::{Deserialize, Serialize};

/// A person to compare against the catalog. Weight is in pounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Human {
    pub name: String,
    pub feet: f64,
    pub inches: f64,
    pub weight: f64,
    pub diet: String,
}

impl Human {
    pub fn new(
        name: impl Into<String>,
        feet: f64,
        inches: f64,
        weight: f64,
        diet: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            feet,
            inches,
            weight,
            diet: diet.into(),
        }
    }

    /// Total height in inches, unrounded
    pub fn height_in_inches(&self) -> f64 {
        self.feet * 12.0 + self.inches
    }

    /// Total height in inches rounded to one decimal, for display only
    pub fn height_display(&self) -> String {
        format!("{:.1}", round_tenth(self.height_in_inches()))
    }
}

/// Raw form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HumanForm {
    pub name: String,
    pub feet: String,
    pub inches: String,
    pub weight: String,
    pub diet: String,
}

impl HumanForm {
    /// Coerce the text fields into a `Human`
    ///
    /// Rejects blank names, non-numeric measurements, negative feet or
    /// inches and non-positive weights instead of letting NaN leak into
    /// the comparison text. A blank inches field counts as zero.
    pub fn parse(&self) -> Result<Human> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DinoError::invalid_input("name", &self.name));
        }

        let feet = parse_number("feet", &self.feet)?;
        if feet < 0.0 {
            return Err(DinoError::invalid_input("feet", &self.feet));
        }

        let inches = if self.inches.trim().is_empty() {
            0.0
        } else {
            parse_number("inches", &self.inches)?
        };
        if inches < 0.0 {
            return Err(DinoError::invalid_input("inches", &self.inches));
        }

        let weight = parse_number("weight", &self.weight)?;
        if weight <= 0.0 {
            return Err(DinoError::invalid_input("weight", &self.weight));
        }

        if feet * 12.0 + inches <= 0.0 {
            return Err(DinoError::invalid_input("feet", &self.feet));
        }

        let diet = self.diet.trim();
        if diet.is_empty() {
            return Err(DinoError::invalid_input("diet", &self.diet));
        }

        Ok(Human::new(name, feet, inches, weight, diet))
    }

    /// Empty every field for the next round
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Empty one field by name, e.g. after it failed to parse
    pub fn clear_field(&mut self, field: &str) {
        match field {
            "name" => self.name.clear(),
            "feet" => self.feet.clear(),
            "inches" => self.inches.clear(),
            "weight" => self.weight.clear(),
            "diet" => self.diet.clear(),
            _ => {}
        }
    }

    /// Names of the fields still left blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("feet", &self.feet),
            ("inches", &self.inches),
            ("weight", &self.weight),
            ("diet", &self.diet),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| DinoError::invalid_input(field, value))
}

//! Weight, height and diet statements for one dinosaur against one human
//!
//! Ratios are rounded to one decimal before they are compared or printed,
//! so "heavier"/"taller" decisions match the number shown to the user.

use crate::core::types::{round_tenth, DietMatching};
use crate::entity::{Dinosaur, Human};

/// dino.weight / human.weight, rounded to one decimal
pub fn weight_ratio(dino: &Dinosaur, human: &Human) -> f64 {
    round_tenth(dino.weight / human.weight)
}

/// dino.height / human height in inches, rounded to one decimal
pub fn height_ratio(dino: &Dinosaur, human: &Human) -> f64 {
    round_tenth(dino.height / human.height_in_inches())
}

/// Render a ratio with exactly one digit after the decimal point
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.1}", ratio)
}

/// "The {species} was {ratio} heavier|thinner than you."
///
/// A ratio of exactly 1.0 reads as "thinner".
pub fn compare_weight(dino: &Dinosaur, human: &Human) -> String {
    let ratio = weight_ratio(dino, human);
    let word = if ratio > 1.0 { "heavier" } else { "thinner" };
    format!(
        "The {} was {} {} than you.",
        dino.species,
        format_ratio(ratio),
        word
    )
}

/// "The {species} was {ratio} taller|shorter than you.", or the
/// "as tall as" line when the rounded ratio is exactly 1.0
pub fn compare_height(dino: &Dinosaur, human: &Human) -> String {
    let ratio = height_ratio(dino, human);
    if ratio == 1.0 {
        return format!("You are as tall as the {}.", dino.species);
    }

    let word = if ratio > 1.0 { "taller" } else { "shorter" };
    format!(
        "The {} was {} {} than you.",
        dino.species,
        format_ratio(ratio),
        word
    )
}

pub fn compare_diet(dino: &Dinosaur, human: &Human, matching: DietMatching) -> String {
    if matching.matches(&dino.diet, &human.diet) {
        format!("You are both {}.", dino.diet)
    } else {
        format!(
            "You are {} but the {} is {}.",
            human.diet, dino.species, dino.diet
        )
    }
}

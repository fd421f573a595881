//! Dino Compare - weigh and measure yourself against the dinosaurs

pub mod catalog;
pub mod compare;
pub mod core;
pub mod entity;
pub mod facts;
pub mod session;
pub mod tiles;

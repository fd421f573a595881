pub mod dinosaur;
pub mod human;

pub use dinosaur::Dinosaur;
pub use human::{Human, HumanForm};

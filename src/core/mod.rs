pub mod config;
pub mod error;
pub mod types;

pub use config::CompareConfig;
pub use error::{DinoError, Result};
pub use types::{DietMatching, TileKind};

// Library interface for kartfinder
// The binary and integration tests both go through this crate

pub mod batch;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod finder;
pub mod render;

// Re-export commonly used types
pub use catalog::{ChassisBrand, EngineFamily, RaceClass, StrokeType, Tier};
pub use config::{AppConfig, Theme};
pub use errors::KartFinderError;
pub use finder::{KartFinder, Recommendation, Selections, recommend};

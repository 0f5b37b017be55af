// Static reference data for the kart finder
// Race classes, chassis brands and engine families are fixed at build time
// and never change while the program runs

pub mod chassis;
pub mod classes;
pub mod engines;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use chassis::{CHASSIS_BRANDS, ChassisBrand};
pub use classes::{RACE_CLASSES, RaceClass};
pub use engines::EngineFamily;

/// Combustion cycle of an engine family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrokeType {
    #[serde(rename = "four-stroke", alias = "4-stroke")]
    FourStroke,
    #[serde(rename = "two-stroke", alias = "2-stroke")]
    TwoStroke,
}

impl std::fmt::Display for StrokeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrokeType::FourStroke => write!(f, "4-Stroke"),
            StrokeType::TwoStroke => write!(f, "2-Stroke"),
        }
    }
}

/// Price and competitiveness category a chassis brand is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Entry,
    Mid,
    Premium,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Entry => write!(f, "entry"),
            Tier::Mid => write!(f, "mid"),
            Tier::Premium => write!(f, "premium"),
        }
    }
}

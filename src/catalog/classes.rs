use serde::Serialize;

use super::{EngineFamily, StrokeType};

/// A sanctioned race class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaceClass {
    /// Class name (e.g., "Rotax Junior Max")
    pub name: &'static str,
    /// Age bracket as printed on the class sheet
    pub age_label: &'static str,
    /// Youngest eligible age, inclusive
    pub age_min: u8,
    /// Oldest eligible age, inclusive (99 means open-ended)
    pub age_max: u8,
    /// Minimum competitive weight of kart plus driver, in pounds
    pub min_weight_lbs: u16,
    /// Spec tire
    pub tire: &'static str,
    pub engine: EngineFamily,
}

impl RaceClass {
    pub fn stroke(&self) -> StrokeType {
        self.engine.stroke()
    }

    /// Inclusive interval intersection with `[min, max]`.
    pub fn overlaps_ages(&self, min: u8, max: u8) -> bool {
        self.age_min <= max && self.age_max >= min
    }
}

const fn class(
    name: &'static str,
    age_label: &'static str,
    age_min: u8,
    age_max: u8,
    min_weight_lbs: u16,
    tire: &'static str,
    engine: EngineFamily,
) -> RaceClass {
    RaceClass {
        name,
        age_label,
        age_min,
        age_max,
        min_weight_lbs,
        tire,
        engine,
    }
}

const MAXXIS_T4: &str = "Maxxis T4";
const MG_RED: &str = "MG RED";

/// Every race class in the club rulebook, in presentation order.
pub static RACE_CLASSES: &[RaceClass] = &[
    // 4-stroke, Tillotson listed first
    class("Piston Kup/T4 Bambino", "5-7", 5, 7, 150, "Maxxis T4 Bambino", EngineFamily::TillotsonT4),
    class("Tillotson T4 MINI", "8-12", 8, 12, 245, MAXXIS_T4, EngineFamily::TillotsonT4),
    class("Tillotson T4 Junior", "12-15", 12, 15, 320, MAXXIS_T4, EngineFamily::TillotsonT4),
    class("Tillotson T4 Senior", "15+", 15, 99, 360, MAXXIS_T4, EngineFamily::TillotsonT4),
    class("Tillotson T4 380", "32+", 32, 99, 385, MAXXIS_T4, EngineFamily::TillotsonT4),
    // 4-stroke, Briggs 206
    class("206 MINI/Cadet", "8-12", 8, 12, 245, MG_RED, EngineFamily::Briggs206),
    class("206 Junior", "12-15", 12, 15, 320, MG_RED, EngineFamily::Briggs206),
    class("206 Senior", "15+", 15, 99, 360, MG_RED, EngineFamily::Briggs206),
    class("206 390", "32+", 32, 99, 385, MG_RED, EngineFamily::Briggs206),
    // 2-stroke, Rotax
    class("Rotax MICRO Max", "8-12", 8, 12, 230, MG_RED, EngineFamily::Rotax),
    class("Rotax MINI Max", "10-13", 10, 13, 265, MG_RED, EngineFamily::Rotax),
    class("Rotax Junior Max", "12-15", 12, 15, 320, MG_RED, EngineFamily::Rotax),
    class("Rotax Senior Max", "15+", 15, 99, 360, MG_RED, EngineFamily::Rotax),
    class("Rotax Masters", "32+", 32, 99, 385, MG_RED, EngineFamily::Rotax),
    // 2-stroke, IAME
    class("IAME Swift MINI", "8-12", 8, 12, 245, MG_RED, EngineFamily::Iame),
    class("IAME KA Junior", "12-15", 12, 15, 320, MG_RED, EngineFamily::Iame),
    class("IAME KA Senior", "15+", 15, 99, 360, MG_RED, EngineFamily::Iame),
    class("IAME KA Master", "32+", 32, 99, 385, MG_RED, EngineFamily::Iame),
    class("Shifter", "15+", 15, 99, 395, MG_RED, EngineFamily::Iame),
];

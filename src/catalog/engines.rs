use serde::{Deserialize, Serialize};

use super::StrokeType;

/// Engine platforms raced in the club's class structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineFamily {
    TillotsonT4,
    Briggs206,
    Rotax,
    Iame,
}

impl EngineFamily {
    /// Four-stroke platforms, primary recommendation first.
    pub const FOUR_STROKE: [EngineFamily; 2] = [EngineFamily::TillotsonT4, EngineFamily::Briggs206];

    /// Two-stroke platforms, entry international platform first.
    pub const TWO_STROKE: [EngineFamily; 2] = [EngineFamily::Rotax, EngineFamily::Iame];

    pub fn name(&self) -> &'static str {
        match self {
            EngineFamily::TillotsonT4 => "Tillotson T4",
            EngineFamily::Briggs206 => "Briggs 206",
            EngineFamily::Rotax => "Rotax",
            EngineFamily::Iame => "IAME",
        }
    }

    pub fn stroke(&self) -> StrokeType {
        match self {
            EngineFamily::TillotsonT4 | EngineFamily::Briggs206 => StrokeType::FourStroke,
            EngineFamily::Rotax | EngineFamily::Iame => StrokeType::TwoStroke,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EngineFamily::TillotsonT4 => {
                "Our recommended 4-stroke platform. Affordable, reliable, and growing fast with its own dedicated class structure from Bambino to Masters. Complete kart packages available, the easiest way to get on the grid."
            }
            EngineFamily::Briggs206 => {
                "A popular 4-stroke spec engine class. Everyone runs equal equipment so the focus is on driver skill. Very affordable to maintain."
            }
            EngineFamily::Rotax => {
                "World-renowned 2-stroke platform with a full class ladder from Micro to Masters. Higher speeds and the gateway to international competition."
            }
            EngineFamily::Iame => {
                "Top-tier 2-stroke engines used in national and international competition. High performance with excellent support and parts availability."
            }
        }
    }

    /// Families of the given stroke type, in presentation order.
    pub fn of_stroke(stroke: StrokeType) -> [EngineFamily; 2] {
        match stroke {
            StrokeType::FourStroke => Self::FOUR_STROKE,
            StrokeType::TwoStroke => Self::TWO_STROKE,
        }
    }
}

impl std::fmt::Display for EngineFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_groups_are_consistent() {
        for family in EngineFamily::FOUR_STROKE {
            assert_eq!(family.stroke(), StrokeType::FourStroke);
        }
        for family in EngineFamily::TWO_STROKE {
            assert_eq!(family.stroke(), StrokeType::TwoStroke);
        }
    }

    #[test]
    fn test_of_stroke_order() {
        assert_eq!(
            EngineFamily::of_stroke(StrokeType::FourStroke),
            [EngineFamily::TillotsonT4, EngineFamily::Briggs206]
        );
        assert_eq!(
            EngineFamily::of_stroke(StrokeType::TwoStroke),
            [EngineFamily::Rotax, EngineFamily::Iame]
        );
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(EngineFamily::Iame.to_string(), "IAME");
        assert_eq!(EngineFamily::Briggs206.to_string(), "Briggs 206");
    }
}

use log::debug;
use serde::Serialize;

use super::{AgeBracket, Budget, EnginePreference, Experience, Selections};
use crate::catalog::{CHASSIS_BRANDS, EngineFamily, RACE_CLASSES, RaceClass, StrokeType, Tier};

/// Inclusive age interval a bracket stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    /// Range used when no bracket was chosen.
    pub const ANY: AgeRange = AgeRange { min: 0, max: 99 };

    /// Resolve an age bracket into the ages it covers.
    ///
    /// `15+` stops at 31 so that it does not swallow the `32+` masters
    /// bracket. A missing bracket covers every age.
    pub fn for_bracket(bracket: Option<AgeBracket>) -> Self {
        match bracket {
            Some(AgeBracket::Bambino) => AgeRange { min: 5, max: 7 },
            Some(AgeBracket::Cadet) => AgeRange { min: 8, max: 12 },
            Some(AgeBracket::Junior) => AgeRange { min: 12, max: 15 },
            Some(AgeBracket::Senior) => AgeRange { min: 15, max: 31 },
            Some(AgeBracket::Masters) => AgeRange { min: 32, max: 99 },
            None => Self::ANY,
        }
    }
}

/// A chassis brand suggested to the driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChassisRecommendation {
    pub name: &'static str,
    pub description: &'static str,
}

/// An engine suggestion.
///
/// Highlighted entries are meant to be visually emphasised; only the
/// newcomer advice entry is highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineRecommendation {
    pub name: &'static str,
    pub description: &'static str,
    pub highlight: bool,
    /// The engine family this entry is about, absent for advice entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<EngineFamily>,
}

impl From<EngineFamily> for EngineRecommendation {
    fn from(family: EngineFamily) -> Self {
        Self {
            name: family.name(),
            description: family.description(),
            highlight: false,
            family: Some(family),
        }
    }
}

/// Everything the finder suggests for one set of answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub chassis: Vec<ChassisRecommendation>,
    pub engines: Vec<EngineRecommendation>,
    pub classes: Vec<RaceClass>,
}

impl Recommendation {
    /// False when no race class fits the answers, in which case the driver
    /// should be pointed at the club for guidance.
    pub fn has_classes(&self) -> bool {
        !self.classes.is_empty()
    }
}

const NEWCOMER_ADVICE: EngineRecommendation = EngineRecommendation {
    name: "Our Recommendation: Start with 4-Stroke",
    description: "For newer drivers, we recommend starting with a 4-stroke engine, especially the Tillotson T4. Complete kart packages make it easy to get started, maintenance costs are low, and the racing is competitive. You can always move to 2-stroke later.",
    highlight: true,
    family: None,
};

const ALL_TIERS: &[Tier] = &[Tier::Entry, Tier::Mid, Tier::Premium];

/// Work out which chassis price tiers fit the driver.
///
/// A fixed budget maps to its own tier. A flexible (or missing) budget opens
/// every tier, except that a flexible budget is narrowed to entry and mid for
/// newcomers and to mid and premium for experienced racers.
pub fn chassis_tiers(experience: Option<Experience>, budget: Option<Budget>) -> &'static [Tier] {
    match (budget, experience) {
        (Some(Budget::Entry), _) => &[Tier::Entry],
        (Some(Budget::Mid), _) => &[Tier::Mid],
        (Some(Budget::Premium), _) => &[Tier::Premium],
        (Some(Budget::Flexible), Some(exp)) if exp.is_newcomer() => &[Tier::Entry, Tier::Mid],
        (Some(Budget::Flexible), Some(Experience::Experienced)) => &[Tier::Mid, Tier::Premium],
        _ => ALL_TIERS,
    }
}

/// Chassis brands selling into the derived tiers, in catalog order.
pub fn recommend_chassis(selections: &Selections) -> Vec<ChassisRecommendation> {
    let tiers = chassis_tiers(selections.experience, selections.budget);
    CHASSIS_BRANDS
        .iter()
        .filter(|brand| brand.serves_any(tiers))
        .map(|brand| ChassisRecommendation {
            name: brand.name,
            description: brand.description,
        })
        .collect()
}

/// Engines matching the stroke preference.
///
/// Undecided drivers get both four-stroke and two-stroke platforms, and if
/// they are also new to racing the list opens with highlighted advice to
/// start on a four-stroke.
pub fn recommend_engines(selections: &Selections) -> Vec<EngineRecommendation> {
    let strokes: &[StrokeType] = match selections.engine {
        Some(EnginePreference::FourStroke) => &[StrokeType::FourStroke],
        Some(EnginePreference::TwoStroke) => &[StrokeType::TwoStroke],
        Some(EnginePreference::NotSure) => &[StrokeType::FourStroke, StrokeType::TwoStroke],
        None => &[],
    };

    let mut engines: Vec<EngineRecommendation> = strokes
        .iter()
        .flat_map(|stroke| EngineFamily::of_stroke(*stroke))
        .map(EngineRecommendation::from)
        .collect();

    let newcomer = selections.experience.is_some_and(|e| e.is_newcomer());
    if selections.engine == Some(EnginePreference::NotSure) && newcomer {
        engines.insert(0, NEWCOMER_ADVICE);
    }

    engines
}

/// Race classes whose age bounds overlap the driver's bracket and whose
/// engine matches the stroke preference, in catalog order.
pub fn matching_classes(selections: &Selections) -> Vec<RaceClass> {
    let range = AgeRange::for_bracket(selections.age);
    let stroke = match selections.engine {
        Some(EnginePreference::FourStroke) => Some(StrokeType::FourStroke),
        Some(EnginePreference::TwoStroke) => Some(StrokeType::TwoStroke),
        Some(EnginePreference::NotSure) | None => None,
    };

    RACE_CLASSES
        .iter()
        .filter(|class| class.overlaps_ages(range.min, range.max))
        .filter(|class| stroke.is_none_or(|s| class.stroke() == s))
        .cloned()
        .collect()
}

/// Run every recommender over the same answers.
///
/// The three lists are computed independently of each other and depend only
/// on `selections` and the static catalogs.
pub fn recommend(selections: &Selections) -> Recommendation {
    let recommendation = Recommendation {
        chassis: recommend_chassis(selections),
        engines: recommend_engines(selections),
        classes: matching_classes(selections),
    };
    debug!(
        "Recommendation for {:?}: {} chassis, {} engines, {} classes",
        selections,
        recommendation.chassis.len(),
        recommendation.engines.len(),
        recommendation.classes.len()
    );
    recommendation
}

use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::KartFinderError;

pub mod recommendations;
pub mod wizard;


pub use recommendations::{
    AgeRange, ChassisRecommendation, EngineRecommendation, Recommendation, recommend,
};
pub use wizard::{KartFinder, StepStatus, WizardStep};

/// A fixed set of answer codes offered by one question of the finder.
///
/// Codes are the machine values ("8-12", "brand-new", ...) and labels are the
/// human-readable option text.
pub trait Answer: Sized + Copy + 'static {
    /// Name of the question, used in error messages
    const FIELD: &'static str;
    /// Every option, in the order they are offered
    const ALL: &'static [Self];

    fn code(&self) -> &'static str;
    fn label(&self) -> &'static str;

    /// Extra spellings accepted when parsing.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Look up an answer by exact code or alias, returning `None` when
    /// unrecognized. Matching is case-sensitive and does not trim.
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.code() == code || a.aliases().contains(&code))
    }

    /// Strict lookup used where user input is validated up front.
    fn parse_code(code: &str) -> Result<Self, KartFinderError> {
        Self::from_code(code).ok_or_else(|| KartFinderError::InvalidSelection {
            field: Self::FIELD.to_string(),
            value: code.to_string(),
            expected: Self::ALL.iter().map(|a| a.code()).join(", "),
        })
    }
}

/// Age bracket the driver falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "5-7")]
    Bambino,
    #[serde(rename = "8-12")]
    Cadet,
    #[serde(rename = "12-15")]
    Junior,
    #[serde(rename = "15+")]
    Senior,
    #[serde(rename = "32+")]
    Masters,
}

impl Answer for AgeBracket {
    const FIELD: &'static str = "age";
    const ALL: &'static [Self] = &[
        AgeBracket::Bambino,
        AgeBracket::Cadet,
        AgeBracket::Junior,
        AgeBracket::Senior,
        AgeBracket::Masters,
    ];

    fn code(&self) -> &'static str {
        match self {
            AgeBracket::Bambino => "5-7",
            AgeBracket::Cadet => "8-12",
            AgeBracket::Junior => "12-15",
            AgeBracket::Senior => "15+",
            AgeBracket::Masters => "32+",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AgeBracket::Bambino => "5 to 7 years old",
            AgeBracket::Cadet => "8 to 12 years old",
            AgeBracket::Junior => "12 to 15 years old",
            AgeBracket::Senior => "15 and older",
            AgeBracket::Masters => "32 and older (Masters)",
        }
    }
}

/// How much karting the driver has done before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Experience {
    BrandNew,
    Rental,
    SomeExperience,
    Experienced,
}

impl Experience {
    /// Drivers who have never raced a sprint kart.
    pub fn is_newcomer(&self) -> bool {
        matches!(self, Experience::BrandNew | Experience::Rental)
    }
}

impl Answer for Experience {
    const FIELD: &'static str = "experience";
    const ALL: &'static [Self] = &[
        Experience::BrandNew,
        Experience::Rental,
        Experience::SomeExperience,
        Experience::Experienced,
    ];

    fn code(&self) -> &'static str {
        match self {
            Experience::BrandNew => "brand-new",
            Experience::Rental => "rental",
            Experience::SomeExperience => "some-experience",
            Experience::Experienced => "experienced",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Experience::BrandNew => "Brand new to karting",
            Experience::Rental => "Rental karts only",
            Experience::SomeExperience => "Some racing experience",
            Experience::Experienced => "Experienced racer",
        }
    }
}

/// Preferred engine type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnginePreference {
    #[serde(rename = "four-stroke", alias = "4-stroke")]
    FourStroke,
    #[serde(rename = "two-stroke", alias = "2-stroke")]
    TwoStroke,
    #[serde(rename = "not-sure")]
    NotSure,
}

impl Answer for EnginePreference {
    const FIELD: &'static str = "engine";
    const ALL: &'static [Self] = &[
        EnginePreference::FourStroke,
        EnginePreference::TwoStroke,
        EnginePreference::NotSure,
    ];

    fn code(&self) -> &'static str {
        match self {
            EnginePreference::FourStroke => "four-stroke",
            EnginePreference::TwoStroke => "two-stroke",
            EnginePreference::NotSure => "not-sure",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EnginePreference::FourStroke => "4-stroke (lower cost, easier upkeep)",
            EnginePreference::TwoStroke => "2-stroke (faster, more competitive)",
            EnginePreference::NotSure => "Not sure yet",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            EnginePreference::FourStroke => &["4-stroke"],
            EnginePreference::TwoStroke => &["2-stroke"],
            EnginePreference::NotSure => &[],
        }
    }
}

/// What the driver is prepared to spend on a chassis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Entry,
    Mid,
    Premium,
    Flexible,
}

impl Answer for Budget {
    const FIELD: &'static str = "budget";
    const ALL: &'static [Self] = &[Budget::Entry, Budget::Mid, Budget::Premium, Budget::Flexible];

    fn code(&self) -> &'static str {
        match self {
            Budget::Entry => "entry",
            Budget::Mid => "mid",
            Budget::Premium => "premium",
            Budget::Flexible => "flexible",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Budget::Entry => "Keep it affordable",
            Budget::Mid => "Mid-range",
            Budget::Premium => "Top of the line",
            Budget::Flexible => "Flexible, show me the options",
        }
    }
}

macro_rules! answer_from_str {
    ($($ty:ty),*) => {
        $(
            impl FromStr for $ty {
                type Err = KartFinderError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as Answer>::parse_code(s)
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.code())
                }
            }
        )*
    };
}

answer_from_str!(AgeBracket, Experience, EnginePreference, Budget);

/// The driver's answers to the finder questions.
///
/// Every field is optional: a missing answer means "no filter" to the
/// recommenders. Unrecognized codes are dropped on deserialization so that
/// stale or hand-edited input degrades to the permissive defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selections {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub age: Option<AgeBracket>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub experience: Option<Experience>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub engine: Option<EnginePreference>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
}

impl Selections {
    /// True once every question has an answer.
    pub fn is_complete(&self) -> bool {
        self.age.is_some()
            && self.experience.is_some()
            && self.engine.is_some()
            && self.budget.is_some()
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Answer,
{
    // anything that is not a string counts as unrecognized
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(T::from_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_aliases() {
        assert_eq!(
            EnginePreference::from_code("4-stroke"),
            Some(EnginePreference::FourStroke)
        );
        assert_eq!(
            EnginePreference::from_code("two-stroke"),
            Some(EnginePreference::TwoStroke)
        );
        assert_eq!(Budget::from_code("flexible"), Some(Budget::Flexible));
    }

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(Budget::from_code("FLEXIBLE"), None);
        assert_eq!(Budget::from_code(" flexible "), None);
        assert_eq!(EnginePreference::from_code("FOUR-STROKE"), None);
        assert_eq!(EnginePreference::from_code("4-STROKE"), None);
    }

    #[test]
    fn test_uppercase_flexible_budget_is_not_narrowed() {
        let selections: Selections =
            serde_json::from_str(r#"{"experience": "experienced", "budget": "FLEXIBLE"}"#).unwrap();
        assert_eq!(selections.budget, None);

        let chassis: Vec<_> = recommend(&selections).chassis.iter().map(|c| c.name).collect();
        assert_eq!(chassis.len(), 7);
        assert!(chassis.contains(&"DAP Kart"));
    }

    #[test]
    fn test_non_string_answers_deserialize_as_unrecognized() {
        let selections: Selections = serde_json::from_str(
            r#"{"age": 15, "experience": ["rental"], "engine": null, "budget": "mid"}"#,
        )
        .unwrap();
        assert_eq!(selections.age, None);
        assert_eq!(selections.experience, None);
        assert_eq!(selections.engine, None);
        assert_eq!(selections.budget, Some(Budget::Mid));
    }

    #[test]
    fn test_from_code_unrecognized() {
        assert_eq!(AgeBracket::from_code("40+"), None);
        assert_eq!(Experience::from_code(""), None);
    }

    #[test]
    fn test_parse_code_reports_expected_values() {
        let err = "luxury".parse::<Budget>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("budget"));
        assert!(message.contains("entry, mid, premium, flexible"));
    }

    #[test]
    fn test_display_matches_code() {
        for age in AgeBracket::ALL {
            assert_eq!(age.to_string(), age.code());
        }
    }

    #[test]
    fn test_selections_deserialize_is_lenient() {
        let selections: Selections = serde_json::from_str(
            r#"{"age": "15+", "experience": "veteran", "engine": "2-stroke"}"#,
        )
        .unwrap();
        assert_eq!(selections.age, Some(AgeBracket::Senior));
        assert_eq!(selections.experience, None);
        assert_eq!(selections.engine, Some(EnginePreference::TwoStroke));
        assert_eq!(selections.budget, None);
        assert!(!selections.is_complete());
    }

    #[test]
    fn test_selections_serialize_uses_codes() {
        let selections = Selections {
            age: Some(AgeBracket::Cadet),
            experience: Some(Experience::SomeExperience),
            engine: Some(EnginePreference::NotSure),
            budget: None,
        };
        let json = serde_json::to_string(&selections).unwrap();
        assert_eq!(
            json,
            r#"{"age":"8-12","experience":"some-experience","engine":"not-sure"}"#
        );
        let back: Selections = serde_json::from_str(&json).unwrap();
        assert_eq!(back, selections);
    }
}

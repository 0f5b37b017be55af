use log::{debug, info};

use super::{AgeBracket, Answer, Budget, EnginePreference, Experience, Recommendation, Selections};
use crate::errors::KartFinderError;

/// A question in the kart finder, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Age,
    Experience,
    Engine,
    Budget,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Age,
        WizardStep::Experience,
        WizardStep::Engine,
        WizardStep::Budget,
    ];

    /// 1-based position of the step.
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Age => 1,
            WizardStep::Experience => 2,
            WizardStep::Engine => 3,
            WizardStep::Budget => 4,
        }
    }

    pub fn question(&self) -> &'static str {
        match self {
            WizardStep::Age => "How old is the driver?",
            WizardStep::Experience => "How much karting experience do they have?",
            WizardStep::Engine => "Which engine type are you interested in?",
            WizardStep::Budget => "What budget are you working with?",
        }
    }

    /// (code, label) pairs for every option offered at this step.
    pub fn options(&self) -> Vec<(&'static str, &'static str)> {
        fn pairs<T: Answer>() -> Vec<(&'static str, &'static str)> {
            T::ALL.iter().map(|a| (a.code(), a.label())).collect()
        }

        match self {
            WizardStep::Age => pairs::<AgeBracket>(),
            WizardStep::Experience => pairs::<Experience>(),
            WizardStep::Engine => pairs::<EnginePreference>(),
            WizardStep::Budget => pairs::<Budget>(),
        }
    }

    /// Map typed input onto an option code of this step.
    ///
    /// Accepts a 1-based option number or one of the step's codes. Anything
    /// else is rejected so interactive callers can ask again.
    pub fn resolve_input(&self, input: &str) -> Result<&'static str, KartFinderError> {
        fn resolve<T: Answer>(input: &str) -> Result<&'static str, KartFinderError> {
            let numbered = input
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| T::ALL.get(i));
            match numbered {
                Some(answer) => Ok(answer.code()),
                None => T::parse_code(input).map(|answer| answer.code()),
            }
        }

        match self {
            WizardStep::Age => resolve::<AgeBracket>(input),
            WizardStep::Experience => resolve::<Experience>(input),
            WizardStep::Engine => resolve::<EnginePreference>(input),
            WizardStep::Budget => resolve::<Budget>(input),
        }
    }

    fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Age => Some(WizardStep::Experience),
            WizardStep::Experience => Some(WizardStep::Engine),
            WizardStep::Engine => Some(WizardStep::Budget),
            WizardStep::Budget => None,
        }
    }

    fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Age => None,
            WizardStep::Experience => Some(WizardStep::Age),
            WizardStep::Engine => Some(WizardStep::Experience),
            WizardStep::Budget => Some(WizardStep::Engine),
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardStep::Age => write!(f, "Age"),
            WizardStep::Experience => write!(f, "Experience"),
            WizardStep::Engine => write!(f, "Engine"),
            WizardStep::Budget => write!(f, "Budget"),
        }
    }
}

/// Progress indicator state of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Active,
    Pending,
}

/// Step-by-step collection of the finder answers.
///
/// Each call to [`KartFinder::select`] answers the current question and moves
/// on. After the last question the finder shows results until it is
/// restarted.
#[derive(Debug, Clone)]
pub struct KartFinder {
    /// `None` once all questions are answered and results are showing
    current: Option<WizardStep>,
    selections: Selections,
}

impl KartFinder {
    pub fn new() -> Self {
        Self {
            current: Some(WizardStep::Age),
            selections: Selections::default(),
        }
    }

    /// The question being asked, or `None` while showing results.
    pub fn current_step(&self) -> Option<WizardStep> {
        self.current
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn is_showing_results(&self) -> bool {
        self.current.is_none()
    }

    /// Going back is only offered past the first question.
    pub fn can_go_back(&self) -> bool {
        self.current.and_then(|s| s.previous()).is_some()
    }

    /// Answer the current question with `code` and advance.
    ///
    /// An unrecognized code clears the answer for the step rather than
    /// failing, so the recommenders treat it as "no preference". Selecting
    /// while results are showing does nothing.
    pub fn select(&mut self, code: &str) {
        let Some(step) = self.current else {
            debug!("Ignoring selection {code:?}, results already showing");
            return;
        };

        match step {
            WizardStep::Age => self.selections.age = AgeBracket::from_code(code),
            WizardStep::Experience => self.selections.experience = Experience::from_code(code),
            WizardStep::Engine => self.selections.engine = EnginePreference::from_code(code),
            WizardStep::Budget => self.selections.budget = Budget::from_code(code),
        }
        debug!("Step {} answered with {code:?}", step.number());

        self.current = step.next();
        if self.current.is_none() {
            info!("Kart finder completed: {:?}", self.selections);
        }
    }

    /// Return to the previous question. Answers already given are kept.
    pub fn back(&mut self) {
        if let Some(previous) = self.current.and_then(|s| s.previous()) {
            self.current = Some(previous);
        }
    }

    /// Forget every answer and start again from the first question.
    pub fn restart(&mut self) {
        self.current = Some(WizardStep::Age);
        self.selections = Selections::default();
    }

    /// Progress indicator for each step, in order.
    pub fn progress(&self) -> [(WizardStep, StepStatus); 4] {
        let current = self.current.map(|s| s.number());
        WizardStep::ALL.map(|step| {
            let status = match current {
                None => StepStatus::Done,
                Some(n) if step.number() < n => StepStatus::Done,
                Some(n) if step.number() == n => StepStatus::Active,
                Some(_) => StepStatus::Pending,
            };
            (step, status)
        })
    }

    /// Recommendations, available once every question has been answered.
    pub fn results(&self) -> Option<Recommendation> {
        self.is_showing_results()
            .then(|| super::recommend(&self.selections))
    }
}

impl Default for KartFinder {
    fn default() -> Self {
        Self::new()
    }
}

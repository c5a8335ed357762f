use crate::model::{LearningStyle, UserProfile};
use crate::onboarding::form::FormState;
use crate::onboarding::validator::{FormField, StepErrors, validate_step};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Skills,
    Goal,
    Time,
}

impl WizardStep {
    pub const ALL: [Self; 3] = [Self::Skills, Self::Goal, Self::Time];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Skills => 0,
            Self::Goal => 1,
            Self::Time => 2,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Skills => "Current Skills",
            Self::Goal => "Target Goal",
            Self::Time => "Time Commitment",
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

/// Result of a successful `advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Moved to the given step.
    Advanced(WizardStep),
    /// The last step passed; the answers form a complete profile.
    Completed(UserProfile),
}

/// Step cursor over the onboarding form.
///
/// The cursor only moves forward when the current step validates; the errors
/// of the last failed attempt stay available for inline display.
#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    step: WizardStep,
    form: FormState,
    errors: StepErrors,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: WizardStep::Skills,
            form: FormState::new(),
            errors: StepErrors::default(),
        }
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn errors(&self) -> &StepErrors {
        &self.errors
    }

    pub fn add_skill(&mut self, input: &str) -> bool {
        let added = self.form.add_skill(input);
        if added {
            self.errors.clear_field(FormField::CurrentSkills);
        }
        added
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        self.form.remove_skill(skill)
    }

    pub fn set_target_goal(&mut self, goal: impl Into<String>) {
        self.form.target_goal = goal.into();
    }

    pub fn set_hours_per_week(&mut self, hours: Option<u32>) {
        self.form.hours_per_week = hours;
    }

    pub fn set_duration_weeks(&mut self, weeks: Option<u32>) {
        self.form.duration_weeks = weeks;
    }

    pub fn set_learning_style(&mut self, style: LearningStyle) {
        self.form.learning_style = style;
    }

    /// Validate the current step and move past it.
    ///
    /// # Errors
    ///
    /// Returns the step's `StepErrors`; the cursor does not move.
    pub fn advance(&mut self) -> Result<WizardOutcome, StepErrors> {
        if let Err(errors) = validate_step(self.step, &self.form) {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors = StepErrors::default();

        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(WizardOutcome::Advanced(next))
            }
            None => self.form.to_profile().map(WizardOutcome::Completed),
        }
    }

    /// Move one step back. Returns `false` on the first step.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                self.errors = StepErrors::default();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::ValidationError;

    #[test]
    fn step_navigation_is_clamped() {
        assert_eq!(WizardStep::Skills.previous(), None);
        assert_eq!(WizardStep::Time.next(), None);
        assert_eq!(WizardStep::from_index(1), Some(WizardStep::Goal));
        assert_eq!(WizardStep::from_index(3), None);
    }

    #[test]
    fn step_titles_follow_order() {
        let titles: Vec<_> = WizardStep::ALL.iter().map(|step| step.title()).collect();
        assert_eq!(titles, ["Current Skills", "Target Goal", "Time Commitment"]);
    }

    #[test]
    fn wizard_blocks_on_invalid_step() {
        let mut wizard = OnboardingWizard::new();

        let errors = wizard.advance().unwrap_err();
        assert!(errors.contains(FormField::CurrentSkills));
        assert_eq!(wizard.step(), WizardStep::Skills);

        wizard.add_skill("HTML");
        assert!(wizard.errors().is_empty());
        assert_eq!(
            wizard.advance().unwrap(),
            WizardOutcome::Advanced(WizardStep::Goal)
        );
    }

    #[test]
    fn wizard_completes_with_profile() {
        let mut wizard = OnboardingWizard::new();
        wizard.add_skill("HTML");
        wizard.advance().unwrap();
        wizard.set_target_goal("Build a SaaS app");
        wizard.advance().unwrap();
        wizard.set_hours_per_week(Some(6));
        wizard.set_duration_weeks(None);

        let errors = wizard.advance().unwrap_err();
        assert_eq!(
            errors.get(FormField::DurationWeeks),
            Some(ValidationError::InvalidNumber)
        );

        wizard.set_duration_weeks(Some(4));
        let WizardOutcome::Completed(profile) = wizard.advance().unwrap() else {
            panic!("expected a completed profile");
        };
        assert_eq!(profile.current_skills(), ["HTML"]);
        assert_eq!(profile.target_goal(), "Build a SaaS app");
        assert_eq!(profile.hours_per_week(), 6);
        assert_eq!(profile.duration_weeks(), 4);
    }

    #[test]
    fn back_clears_errors() {
        let mut wizard = OnboardingWizard::new();
        wizard.add_skill("CSS");
        wizard.advance().unwrap();
        let _ = wizard.advance();
        assert!(!wizard.errors().is_empty());

        assert!(wizard.back());
        assert!(wizard.errors().is_empty());
        assert!(!wizard.back());
    }
}

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::model::ProfileError;
use crate::onboarding::form::FormState;
use crate::onboarding::wizard::WizardStep;

/// Form fields that can carry a step error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    CurrentSkills,
    TargetGoal,
    HoursPerWeek,
    DurationWeeks,
}

impl FormField {
    /// Field name as the form addresses it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::CurrentSkills => "currentSkills",
            Self::TargetGoal => "targetGoal",
            Self::HoursPerWeek => "hoursPerWeek",
            Self::DurationWeeks => "durationWeeks",
        }
    }

    /// Inline message shown under the field when it fails.
    #[must_use]
    pub fn error_message(self) -> &'static str {
        match self {
            Self::CurrentSkills => "Please add at least one skill",
            Self::TargetGoal => "Please describe your target goal",
            Self::HoursPerWeek => "Please enter valid hours per week",
            Self::DurationWeeks => "Please enter valid duration",
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("collection must not be empty")]
    EmptyCollection,

    #[error("field must not be empty")]
    EmptyField,

    #[error("number must be > 0")]
    InvalidNumber,
}

/// Every error found on a step, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepErrors(BTreeMap<FormField, ValidationError>);

impl StepErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: FormField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Inline message for the field, if it failed.
    #[must_use]
    pub fn message(&self, field: FormField) -> Option<&'static str> {
        self.contains(field).then(|| field.error_message())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, ValidationError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, *err))
    }

    pub(crate) fn insert(&mut self, field: FormField, err: ValidationError) {
        self.0.insert(field, err);
    }

    pub(crate) fn clear_field(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    fn merge(&mut self, other: StepErrors) {
        self.0.extend(other.0);
    }

    fn into_result(self) -> Result<(), StepErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for StepErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, _) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.name(), field.error_message())?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for StepErrors {}

impl From<ProfileError> for StepErrors {
    fn from(err: ProfileError) -> Self {
        let (field, kind) = match err {
            ProfileError::NoSkills => (FormField::CurrentSkills, ValidationError::EmptyCollection),
            ProfileError::EmptyGoal => (FormField::TargetGoal, ValidationError::EmptyField),
            ProfileError::InvalidHoursPerWeek => {
                (FormField::HoursPerWeek, ValidationError::InvalidNumber)
            }
            ProfileError::InvalidDurationWeeks => {
                (FormField::DurationWeeks, ValidationError::InvalidNumber)
            }
        };
        let mut errors = Self::default();
        errors.insert(field, kind);
        errors
    }
}

/// Check a single wizard step. Pure; all errors of the step are reported together.
///
/// # Errors
///
/// Returns `StepErrors` when any field of the step is incomplete.
pub fn validate_step(step: WizardStep, form: &FormState) -> Result<(), StepErrors> {
    let mut errors = StepErrors::default();

    match step {
        WizardStep::Skills => {
            if form.current_skills.is_empty() {
                errors.insert(FormField::CurrentSkills, ValidationError::EmptyCollection);
            }
        }
        WizardStep::Goal => {
            if form.target_goal.trim().is_empty() {
                errors.insert(FormField::TargetGoal, ValidationError::EmptyField);
            }
        }
        WizardStep::Time => {
            if !is_positive(form.hours_per_week) {
                errors.insert(FormField::HoursPerWeek, ValidationError::InvalidNumber);
            }
            if !is_positive(form.duration_weeks) {
                errors.insert(FormField::DurationWeeks, ValidationError::InvalidNumber);
            }
        }
    }

    errors.into_result()
}

/// Check every step at once, e.g. before submitting.
///
/// # Errors
///
/// Returns the union of every step's `StepErrors`.
pub fn validate_all(form: &FormState) -> Result<(), StepErrors> {
    let mut errors = StepErrors::default();
    for step in WizardStep::ALL {
        if let Err(step_errors) = validate_step(step, form) {
            errors.merge(step_errors);
        }
    }
    errors.into_result()
}

fn is_positive(value: Option<u32>) -> bool {
    value.is_some_and(|value| value > 0)
}

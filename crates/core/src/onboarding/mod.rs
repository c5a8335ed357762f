//! Onboarding questionnaire: form state, per-step validation and the wizard
//! cursor that gates advancing on it.

mod form;
mod validator;
mod wizard;

pub use form::FormState;
pub use validator::{FormField, StepErrors, ValidationError, validate_all, validate_step};
pub use wizard::{OnboardingWizard, WizardOutcome, WizardStep};

#![forbid(unsafe_code)]

pub mod model;
pub mod normalize;
pub mod onboarding;
pub mod quiz_session;
pub mod store;

pub use normalize::{NormalizationError, PathNormalizer, QuizNormalizer};
pub use onboarding::{FormState, OnboardingWizard, WizardStep};
pub use quiz_session::{QuizError, QuizPhase, QuizResult, QuizSession};
pub use store::{Action, ProgressStore, RequestStatus, ViewMode};

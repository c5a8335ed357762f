mod ids;
mod path;
mod profile;
mod quiz;

pub use ids::{QuestionId, ResourceId, WeekId};
pub use path::{LearningPath, Resource, ResourceKind, Week};
pub use profile::{LearningStyle, ProfileError, UserProfile};
pub use quiz::{Quiz, QuizQuestion};

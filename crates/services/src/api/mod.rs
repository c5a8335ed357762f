//! Contract with the remote path and quiz generator.

mod http;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use pathway_core::model::{UserProfile, Week};
use pathway_core::normalize::raw::RawQuiz;

use crate::error::ApiError;

pub use http::HttpLearningPathApi;

pub const GENERATE_PATH_ENDPOINT: &str = "learning-paths/generate";
pub const GENERATE_QUIZ_ENDPOINT: &str = "quiz/generate";

/// Body of `POST /learning-paths/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratePathRequest {
    /// Comma-separated skills.
    pub current_skills: String,
    pub target_goal: String,
    pub hours_per_week: u32,
    pub duration_weeks: u32,
    pub preferred_learning_style: String,
}

impl GeneratePathRequest {
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            current_skills: profile.current_skills().join(", "),
            target_goal: profile.target_goal().to_string(),
            hours_per_week: profile.hours_per_week(),
            duration_weeks: profile.duration_weeks(),
            preferred_learning_style: profile.learning_style().as_str().to_string(),
        }
    }
}

/// Body of `POST /quiz/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizRequest {
    pub week_number: u32,
    pub topics: Vec<String>,
}

impl QuizRequest {
    #[must_use]
    pub fn from_week(week: &Week) -> Self {
        Self {
            week_number: week.week_number,
            topics: week.topics.clone(),
        }
    }
}

/// Network collaborator for path and quiz generation.
///
/// Path responses come back as raw JSON because their layout varies; the
/// caller decides the shape. Dropping a returned future abandons the call.
#[async_trait]
pub trait LearningPathApi: Send + Sync {
    /// Request a learning path for the given answers.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` for any transport failure.
    async fn generate_path(&self, request: &GeneratePathRequest) -> Result<Value, ApiError>;

    /// Request a quiz for one week.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` for any transport failure, including
    /// a body that is not a quiz.
    async fn generate_quiz(&self, request: &QuizRequest) -> Result<RawQuiz, ApiError>;
}

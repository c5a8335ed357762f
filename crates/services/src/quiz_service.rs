use std::sync::Arc;

use pathway_core::model::Week;
use pathway_core::{QuizNormalizer, QuizSession};

use crate::api::{LearningPathApi, QuizRequest};
use crate::error::QuizServiceError;

/// Generates per-week quizzes on demand.
#[derive(Clone)]
pub struct QuizService {
    api: Arc<dyn LearningPathApi>,
}

impl QuizService {
    #[must_use]
    pub fn new(api: Arc<dyn LearningPathApi>) -> Self {
        Self { api }
    }

    /// Request a quiz for the week and open an attempt over it.
    ///
    /// The session keeps its own copy of the week.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Api` for transport failures and
    /// `QuizServiceError::Quiz` when the generator returned no questions.
    pub async fn start_quiz(&self, week: &Week) -> Result<QuizSession, QuizServiceError> {
        let request = QuizRequest::from_week(week);
        let raw = self.api.generate_quiz(&request).await?;

        let mut quiz = QuizNormalizer::new().normalize(raw);
        quiz.week_number.get_or_insert(week.week_number);
        log::info!(
            "quiz for week {} has {} questions",
            week.week_number,
            quiz.len()
        );

        Ok(QuizSession::new(week.clone(), quiz)?)
    }
}

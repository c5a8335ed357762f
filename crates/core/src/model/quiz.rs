use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;

/// A multiple-choice question with its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<String>,
    /// `None` when the generator flagged no option as correct.
    pub correct_option_index: Option<usize>,
    pub explanation: Option<String>,
}

impl QuizQuestion {
    /// Returns true if `option_index` is the flagged correct option.
    #[must_use]
    pub fn is_correct(&self, option_index: usize) -> bool {
        self.correct_option_index == Some(option_index)
    }
}

/// Questions generated for one week.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Quiz {
    pub week_number: Option<u32>,
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// Returns the number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the quiz has no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Looks up a question by id.
    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&QuizQuestion> {
        self.questions.iter().find(|question| &question.id == id)
    }
}

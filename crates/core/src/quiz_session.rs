//! One attempt at a week's quiz.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::model::{QuestionId, Quiz, QuizQuestion, Week};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz has no questions")]
    Empty,

    #[error("quiz already submitted")]
    AlreadySubmitted,

    #[error("{unanswered} question(s) still unanswered")]
    IncompleteAnswers { unanswered: usize },

    #[error("unknown question {0}")]
    UnknownQuestion(QuestionId),

    #[error("option {option} out of range for question {question_id}")]
    OptionOutOfRange { question_id: QuestionId, option: usize },
}

impl QuizError {
    /// True for requests the current phase does not allow; the session is unchanged.
    #[must_use]
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::AlreadySubmitted | Self::IncompleteAnswers { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Submitted,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("in progress"),
            Self::Submitted => f.write_str("submitted"),
        }
    }
}

/// Final tally of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
}

impl QuizResult {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.score as f64 / self.total as f64
    }
}

/// Per-question outcome shown after submitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview<'a> {
    pub question: &'a QuizQuestion,
    pub selected: Option<usize>,
    pub is_correct: bool,
}

/// In-memory quiz attempt.
///
/// Holds a snapshot of the week the quiz was generated for; it never reads
/// or writes the progress store.
#[derive(Debug, Clone)]
pub struct QuizSession {
    week: Week,
    quiz: Quiz,
    current: usize,
    answers: HashMap<QuestionId, usize>,
    phase: QuizPhase,
}

impl QuizSession {
    /// Start an attempt over a normalized quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the quiz has no questions.
    pub fn new(week: Week, quiz: Quiz) -> Result<Self, QuizError> {
        if quiz.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Self {
            week,
            quiz,
            current: 0,
            answers: HashMap::new(),
            phase: QuizPhase::InProgress,
        })
    }

    #[must_use]
    pub fn week(&self) -> &Week {
        &self.week
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase == QuizPhase::Submitted
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.quiz.questions.get(self.current)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.quiz.len()
    }

    #[must_use]
    pub fn answer_for(&self, question_id: &QuestionId) -> Option<usize> {
        self.answers.get(question_id).copied()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Record the chosen option for a question, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadySubmitted` after submission, and
    /// `UnknownQuestion` / `OptionOutOfRange` for answers that do not fit the quiz.
    pub fn select_answer(
        &mut self,
        question_id: &QuestionId,
        option: usize,
    ) -> Result<(), QuizError> {
        if self.is_submitted() {
            return Err(QuizError::AlreadySubmitted);
        }
        let question = self
            .quiz
            .question(question_id)
            .ok_or_else(|| QuizError::UnknownQuestion(question_id.clone()))?;
        if option >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                question_id: question_id.clone(),
                option,
            });
        }

        self.answers.insert(question_id.clone(), option);
        Ok(())
    }

    /// Move to the next question. No-op on the last one.
    pub fn next(&mut self) -> bool {
        if self.is_last_question() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move to the previous question. No-op on the first one.
    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Finish the attempt once every question has an answer.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteAnswers` while questions are unanswered and
    /// `AlreadySubmitted` when called twice. The session is left unchanged.
    pub fn submit(&mut self) -> Result<QuizResult, QuizError> {
        if self.is_submitted() {
            return Err(QuizError::AlreadySubmitted);
        }
        let unanswered = self
            .quiz
            .questions
            .iter()
            .filter(|question| !self.answers.contains_key(&question.id))
            .count();
        if unanswered > 0 {
            return Err(QuizError::IncompleteAnswers { unanswered });
        }

        self.phase = QuizPhase::Submitted;
        let result = self.result();
        log::debug!(
            "quiz for week {} submitted: {}/{}",
            self.week.week_number,
            result.score,
            result.total
        );
        Ok(result)
    }

    /// Number of questions answered with the correct option. Unanswered never counts.
    #[must_use]
    pub fn score(&self) -> usize {
        self.quiz
            .questions
            .iter()
            .filter(|question| {
                self.answer_for(&question.id)
                    .is_some_and(|selected| question.is_correct(selected))
            })
            .count()
    }

    #[must_use]
    pub fn result(&self) -> QuizResult {
        QuizResult {
            score: self.score(),
            total: self.quiz.len(),
        }
    }

    #[must_use]
    pub fn review(&self) -> Vec<QuestionReview<'_>> {
        self.quiz
            .questions
            .iter()
            .map(|question| {
                let selected = self.answer_for(&question.id);
                QuestionReview {
                    question,
                    selected,
                    is_correct: selected.is_some_and(|option| question.is_correct(option)),
                }
            })
            .collect()
    }

    /// Start over on the same quiz.
    pub fn reset(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.phase = QuizPhase::InProgress;
    }
}

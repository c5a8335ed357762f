use crate::model::{QuestionId, Quiz, QuizQuestion};
use crate::normalize::normalize_optional;
use crate::normalize::raw::{RawQuiz, RawQuizQuestion};

/// Maps generated quiz payloads onto the canonical `Quiz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizNormalizer;

impl QuizNormalizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Flatten option objects and resolve the correct option.
    ///
    /// The correct option is the first one flagged `is_correct`; a question
    /// with no flagged option gets `None`. Several flags are tolerated (the
    /// first wins) but logged, since the generator is expected to flag exactly one.
    #[must_use]
    pub fn normalize(&self, raw: RawQuiz) -> Quiz {
        let questions = raw
            .questions
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, question)| map_question(index, question))
            .collect();

        Quiz {
            week_number: raw.week_number,
            questions,
        }
    }
}

fn map_question(index: usize, raw: RawQuizQuestion) -> QuizQuestion {
    let id = QuestionId::at(index);
    let raw_options = raw.options.unwrap_or_default();

    let flagged: Vec<usize> = raw_options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.is_correct.unwrap_or(false))
        .map(|(position, _)| position)
        .collect();
    match flagged.len() {
        0 => log::warn!("quiz question {id} has no option flagged correct"),
        1 => {}
        count => log::warn!("quiz question {id} has {count} options flagged correct"),
    }

    QuizQuestion {
        id,
        prompt: raw.question.unwrap_or_default(),
        options: raw_options
            .into_iter()
            .map(|option| option.text.unwrap_or_default())
            .collect(),
        correct_option_index: flagged.first().copied(),
        explanation: normalize_optional(raw.explanation),
    }
}

//! Wire payloads → canonical model.

pub mod defaults;
mod path;
mod quiz;
pub mod raw;

use thiserror::Error;

pub use path::{PathNormalizer, ResponseShape};
pub use quiz::QuizNormalizer;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NormalizationError {
    #[error("response carries neither `learning_path` nor `weekly_breakdown`")]
    UnrecognizedResponseShape,

    #[error("malformed learning path payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("week number {week_number} appears more than once")]
    DuplicateWeek { week_number: u32 },
}

/// Trim an optional wire string; blanks become `None`.
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

//! Shared error types for the services crate.

use thiserror::Error;

use pathway_core::{NormalizationError, QuizError};

/// Any transport failure: connection, timeout, non-2xx status or undecodable body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed: {message}")]
    RequestFailed { message: String },
}

impl ApiError {
    #[must_use]
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::RequestFailed {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::RequestFailed { message } => message,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::request_failed(err.to_string())
    }
}

/// Errors emitted while building `ApiConfig`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("invalid timeout seconds: {0}")]
    InvalidTimeout(String),
}

/// Errors emitted by `PathService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PathServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod path_service;
pub mod quiz_service;

pub use api::{GeneratePathRequest, HttpLearningPathApi, LearningPathApi, QuizRequest};
pub use config::{ApiConfig, ApiConfigDraft};
pub use error::{ApiError, ConfigError, PathServiceError, QuizServiceError};
pub use path_service::PathService;
pub use quiz_service::QuizService;

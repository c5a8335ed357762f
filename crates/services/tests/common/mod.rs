#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use pathway_core::model::{LearningStyle, UserProfile};
use pathway_core::normalize::raw::RawQuiz;
use serde_json::{Value, json};
use services::{ApiError, GeneratePathRequest, LearningPathApi, QuizRequest};

/// In-memory generator that replays queued responses and records requests.
#[derive(Default)]
pub struct FakeApi {
    paths: Mutex<VecDeque<Result<Value, ApiError>>>,
    quizzes: Mutex<VecDeque<Result<RawQuiz, ApiError>>>,
    pub path_requests: Mutex<Vec<GeneratePathRequest>>,
    pub quiz_requests: Mutex<Vec<QuizRequest>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(self, response: Result<Value, ApiError>) -> Self {
        self.paths.lock().unwrap().push_back(response);
        self
    }

    pub fn with_quiz(self, response: Result<RawQuiz, ApiError>) -> Self {
        self.quizzes.lock().unwrap().push_back(response);
        self
    }
}

#[async_trait]
impl LearningPathApi for FakeApi {
    async fn generate_path(&self, request: &GeneratePathRequest) -> Result<Value, ApiError> {
        self.path_requests.lock().unwrap().push(request.clone());
        self.paths
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::request_failed("no path queued")))
    }

    async fn generate_quiz(&self, request: &QuizRequest) -> Result<RawQuiz, ApiError> {
        self.quiz_requests.lock().unwrap().push(request.clone());
        self.quizzes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::request_failed("no quiz queued")))
    }
}

pub fn saas_profile() -> UserProfile {
    UserProfile::new(["HTML"], "Build a SaaS app", 6, 4, LearningStyle::HandsOn).unwrap()
}

/// A four week path in the nested layout the generator returns.
pub fn four_week_response() -> Value {
    let weeks: Vec<Value> = (1..=4)
        .map(|number| {
            json!({
                "week_number": number,
                "topic": format!("Topic {number}"),
                "subtopics": [format!("Subtopic {number}a"), format!("Subtopic {number}b")],
                "why_this_first": "builds on the previous week",
                "estimated_hours": 6,
                "key_takeaways": [format!("Takeaway {number}")],
                "prerequisites_covered": ["HTML"],
                "resources": [{
                    "title": format!("Resource {number}"),
                    "type": "article",
                    "search_query": format!("topic {number} guide"),
                    "estimated_time": "1 hour"
                }]
            })
        })
        .collect();

    json!({
        "success": true,
        "message": "ok",
        "learning_path": {
            "path_title": "SaaS in four weeks",
            "total_weeks": 4,
            "total_hours": 24,
            "final_project": "Ship a landing page with sign-up",
            "weekly_breakdown": weeks
        }
    })
}

pub fn quiz_response(questions: usize) -> RawQuiz {
    let questions: Vec<Value> = (0..questions)
        .map(|index| {
            json!({
                "question": format!("Question {index}"),
                "options": [
                    { "text": "right", "is_correct": true },
                    { "text": "wrong", "is_correct": false }
                ],
                "explanation": "because"
            })
        })
        .collect();
    serde_json::from_value(json!({ "questions": questions })).unwrap()
}

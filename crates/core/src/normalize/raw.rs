//! Payloads as the generator service sends them.
//!
//! Every field is optional on the wire; absent and `null` both decode to
//! `None` so the normalizers can apply the named defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLearningPath {
    #[serde(default)]
    pub path_title: Option<String>,
    #[serde(default)]
    pub total_hours: Option<f64>,
    #[serde(default)]
    pub total_weeks: Option<u32>,
    #[serde(default)]
    pub final_project: Option<String>,
    #[serde(default)]
    pub weekly_breakdown: Option<Vec<RawWeek>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWeek {
    #[serde(default)]
    pub week_number: Option<i64>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub subtopics: Option<Vec<String>>,
    #[serde(default)]
    pub why_this_first: Option<String>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub key_takeaways: Option<Vec<String>>,
    #[serde(default)]
    pub prerequisites_covered: Option<Vec<String>>,
    #[serde(default)]
    pub resources: Option<Vec<RawResource>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawQuiz {
    #[serde(default)]
    pub week_number: Option<u32>,
    #[serde(default)]
    pub questions: Option<Vec<RawQuizQuestion>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawQuizQuestion {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<RawQuizOption>>,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuizOption {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub is_correct: Option<bool>,
}

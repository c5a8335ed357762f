use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("at least one current skill is required")]
    NoSkills,

    #[error("target goal cannot be empty")]
    EmptyGoal,

    #[error("hours per week must be > 0")]
    InvalidHoursPerWeek,

    #[error("duration in weeks must be > 0")]
    InvalidDurationWeeks,
}

/// How the learner prefers to study; forwarded to the generator as a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LearningStyle {
    Visual,
    #[default]
    HandsOn,
    Reading,
}

impl LearningStyle {
    /// Wire label (`visual`, `hands-on`, `reading`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::HandsOn => "hands-on",
            Self::Reading => "reading",
        }
    }

    /// Parses a label case-insensitively; `hands_on` and `handson` are accepted.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "visual" => Some(Self::Visual),
            "hands-on" | "hands_on" | "handson" => Some(Self::HandsOn),
            "reading" => Some(Self::Reading),
            _ => None,
        }
    }
}

/// Questionnaire answers submitted at the end of onboarding.
///
/// A profile is only constructed from complete answers and is never edited
/// afterwards; a new onboarding run replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    current_skills: Vec<String>,
    target_goal: String,
    hours_per_week: u32,
    duration_weeks: u32,
    learning_style: LearningStyle,
}

impl UserProfile {
    /// Build a validated profile.
    ///
    /// Skills are trimmed, blanks dropped and exact duplicates removed while
    /// keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` when any answer is missing or out of range.
    pub fn new(
        current_skills: impl IntoIterator<Item = impl Into<String>>,
        target_goal: impl Into<String>,
        hours_per_week: u32,
        duration_weeks: u32,
        learning_style: LearningStyle,
    ) -> Result<Self, ProfileError> {
        let mut skills: Vec<String> = Vec::new();
        for skill in current_skills {
            let skill = skill.into().trim().to_string();
            if !skill.is_empty() && !skills.contains(&skill) {
                skills.push(skill);
            }
        }
        if skills.is_empty() {
            return Err(ProfileError::NoSkills);
        }

        let target_goal = target_goal.into().trim().to_string();
        if target_goal.is_empty() {
            return Err(ProfileError::EmptyGoal);
        }
        if hours_per_week == 0 {
            return Err(ProfileError::InvalidHoursPerWeek);
        }
        if duration_weeks == 0 {
            return Err(ProfileError::InvalidDurationWeeks);
        }

        Ok(Self {
            current_skills: skills,
            target_goal,
            hours_per_week,
            duration_weeks,
            learning_style,
        })
    }

    #[must_use]
    pub fn current_skills(&self) -> &[String] {
        &self.current_skills
    }

    #[must_use]
    pub fn target_goal(&self) -> &str {
        &self.target_goal
    }

    #[must_use]
    pub fn hours_per_week(&self) -> u32 {
        self.hours_per_week
    }

    #[must_use]
    pub fn duration_weeks(&self) -> u32 {
        self.duration_weeks
    }

    #[must_use]
    pub fn learning_style(&self) -> LearningStyle {
        self.learning_style
    }

    /// Hours the learner committed to over the whole duration.
    #[must_use]
    pub fn planned_hours(&self) -> u32 {
        self.hours_per_week.saturating_mul(self.duration_weeks)
    }
}

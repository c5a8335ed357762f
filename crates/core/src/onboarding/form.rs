use crate::model::{LearningStyle, UserProfile};
use crate::onboarding::validator::{StepErrors, validate_all};

/// Raw, possibly incomplete questionnaire answers as the wizard collects them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub current_skills: Vec<String>,
    pub target_goal: String,
    pub hours_per_week: Option<u32>,
    pub duration_weeks: Option<u32>,
    pub learning_style: LearningStyle,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a skill tag.
    ///
    /// Returns `false` (and leaves the tags untouched) when the trimmed input
    /// is blank or already present. Matching is exact and case-sensitive.
    pub fn add_skill(&mut self, input: &str) -> bool {
        let skill = input.trim();
        if skill.is_empty() || self.has_skill(skill) {
            return false;
        }
        self.current_skills.push(skill.to_string());
        true
    }

    /// Remove a skill tag. Returns `false` when it was not present.
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.current_skills.len();
        self.current_skills.retain(|existing| existing != skill);
        self.current_skills.len() != before
    }

    #[must_use]
    pub fn has_skill(&self, skill: &str) -> bool {
        self.current_skills.iter().any(|existing| existing == skill)
    }

    /// Build the submitted profile from a complete form.
    ///
    /// # Errors
    ///
    /// Returns every outstanding `StepErrors` entry when the form is incomplete.
    pub fn to_profile(&self) -> Result<UserProfile, StepErrors> {
        validate_all(self)?;
        let profile = UserProfile::new(
            self.current_skills.iter().cloned(),
            self.target_goal.clone(),
            self.hours_per_week.unwrap_or_default(),
            self.duration_weeks.unwrap_or_default(),
            self.learning_style,
        )?;
        Ok(profile)
    }

    /// Parse a numeric text input the way the time step reads it.
    ///
    /// Only the leading run of digits counts, so `"6.5"` reads as 6. Input
    /// without leading digits is treated as absent.
    #[must_use]
    pub fn parse_number(input: &str) -> Option<u32> {
        let trimmed = input.trim_start();
        let end = trimmed
            .find(|ch: char| !ch.is_ascii_digit())
            .unwrap_or(trimmed.len());
        trimmed[..end].parse::<u32>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_skill_grows_set_by_one() {
        let mut form = FormState::new();
        assert!(form.add_skill("  Rust "));
        assert!(form.add_skill("rust"));
        assert_eq!(form.current_skills, ["Rust", "rust"]);
    }

    #[test]
    fn add_skill_ignores_blank_and_duplicates() {
        let mut form = FormState::new();
        form.add_skill("HTML");

        assert!(!form.add_skill("   "));
        assert!(!form.add_skill("HTML "));
        assert_eq!(form.current_skills.len(), 1);
    }

    #[test]
    fn remove_missing_skill_is_noop() {
        let mut form = FormState::new();
        form.add_skill("CSS");

        assert!(!form.remove_skill("HTML"));
        assert!(form.remove_skill("CSS"));
        assert!(form.current_skills.is_empty());
    }

    #[test]
    fn parse_number_rejects_garbage() {
        assert_eq!(FormState::parse_number(" 6 "), Some(6));
        assert_eq!(FormState::parse_number("-2"), None);
        assert_eq!(FormState::parse_number(""), None);
        assert_eq!(FormState::parse_number("six"), None);
    }

    #[test]
    fn parse_number_keeps_leading_integer() {
        assert_eq!(FormState::parse_number("6.5"), Some(6));
        assert_eq!(FormState::parse_number("12 hours"), Some(12));
        assert_eq!(FormState::parse_number(".5"), None);
    }
}

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::model::{LearningPath, Resource, ResourceId, ResourceKind, Week, WeekId};
use crate::normalize::raw::{RawLearningPath, RawResource, RawWeek};
use crate::normalize::{NormalizationError, defaults, normalize_optional};

const NESTED_KEY: &str = "learning_path";
const BREAKDOWN_KEY: &str = "weekly_breakdown";

/// The two response layouts the generator is known to produce.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// `{ "learning_path": { "weekly_breakdown": [...], ... } }`
    Nested(RawLearningPath),
    /// `{ "weekly_breakdown": [...], ... }`
    Flat(RawLearningPath),
}

impl ResponseShape {
    /// Decode a raw response. The nested layout wins when both are present.
    ///
    /// # Errors
    ///
    /// Returns `UnrecognizedResponseShape` when no breakdown is found, and
    /// `MalformedPayload` when the selected payload has mistyped fields.
    pub fn detect(raw: &Value) -> Result<Self, NormalizationError> {
        if let Some(nested) = raw.get(NESTED_KEY).filter(|value| has_breakdown(value)) {
            let payload = RawLearningPath::deserialize(nested)
                .map_err(NormalizationError::MalformedPayload)?;
            return Ok(Self::Nested(payload));
        }

        if has_breakdown(raw) {
            let payload =
                RawLearningPath::deserialize(raw).map_err(NormalizationError::MalformedPayload)?;
            return Ok(Self::Flat(payload));
        }

        Err(NormalizationError::UnrecognizedResponseShape)
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nested(_) => "nested",
            Self::Flat(_) => "flat",
        }
    }

    #[must_use]
    pub fn into_payload(self) -> RawLearningPath {
        match self {
            Self::Nested(payload) | Self::Flat(payload) => payload,
        }
    }
}

fn has_breakdown(value: &Value) -> bool {
    value.get(BREAKDOWN_KEY).is_some_and(|breakdown| !breakdown.is_null())
}

/// Maps generator responses onto the canonical `LearningPath`.
#[derive(Debug, Clone, Default)]
pub struct PathNormalizer {
    fallback_goal: Option<String>,
}

impl PathNormalizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Goal to use when the payload carries no `path_title`.
    #[must_use]
    pub fn with_fallback_goal(mut self, goal: impl Into<String>) -> Self {
        self.fallback_goal = normalize_optional(Some(goal.into()));
        self
    }

    /// Normalize a raw response of either layout.
    ///
    /// # Errors
    ///
    /// Returns `NormalizationError` when the layout is unknown, the payload is
    /// mistyped, or two weeks resolve to the same week number.
    pub fn normalize(&self, raw: &Value) -> Result<LearningPath, NormalizationError> {
        let shape = ResponseShape::detect(raw)?;
        log::debug!("normalizing {} learning path response", shape.label());
        self.normalize_payload(shape.into_payload())
    }

    /// Normalize an already decoded payload.
    ///
    /// `total_hours` is passed through as reported; only when it is missing is
    /// it derived from the week estimates.
    ///
    /// # Errors
    ///
    /// Returns `NormalizationError::DuplicateWeek` if week ids collide.
    pub fn normalize_payload(
        &self,
        payload: RawLearningPath,
    ) -> Result<LearningPath, NormalizationError> {
        let raw_weeks = payload.weekly_breakdown.unwrap_or_default();

        let mut weeks = Vec::with_capacity(raw_weeks.len());
        let mut seen = HashSet::with_capacity(raw_weeks.len());
        let mut outcomes = Vec::new();
        let mut prerequisites: Vec<String> = Vec::new();

        for (index, mut raw_week) in raw_weeks.into_iter().enumerate() {
            outcomes.extend(raw_week.key_takeaways.take().unwrap_or_default());
            for prerequisite in raw_week.prerequisites_covered.take().unwrap_or_default() {
                if !prerequisites.contains(&prerequisite) {
                    prerequisites.push(prerequisite);
                }
            }

            let week = map_week(index, raw_week);
            if !seen.insert(week.id.clone()) {
                return Err(NormalizationError::DuplicateWeek {
                    week_number: week.week_number,
                });
            }
            weeks.push(week);
        }

        if let Some(total_weeks) = payload.total_weeks {
            if usize::try_from(total_weeks).ok() != Some(weeks.len()) {
                log::warn!(
                    "learning path reports {total_weeks} weeks but carries {}",
                    weeks.len()
                );
            }
        }

        let summed: f64 = weeks.iter().map(|week| week.estimated_hours).sum();
        let total_hours = payload.total_hours.unwrap_or(summed);

        let goal = normalize_optional(payload.path_title)
            .or_else(|| self.fallback_goal.clone())
            .unwrap_or_else(|| defaults::PATH_GOAL.to_string());

        Ok(LearningPath {
            goal,
            weeks,
            total_hours,
            prerequisites,
            outcomes,
            final_project: normalize_optional(payload.final_project),
        })
    }
}

fn map_week(index: usize, raw: RawWeek) -> Week {
    let week_number = raw
        .week_number
        .filter(|number| *number > 0)
        .and_then(|number| u32::try_from(number).ok())
        .unwrap_or_else(|| defaults::week_number(index));

    let resources = raw
        .resources
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(resource_index, resource)| map_resource(index, resource_index, resource))
        .collect();

    Week {
        id: WeekId::for_week(week_number),
        week_number,
        title: normalize_optional(raw.topic)
            .unwrap_or_else(|| defaults::week_title(defaults::week_number(index))),
        topics: raw.subtopics.unwrap_or_default(),
        rationale: raw
            .why_this_first
            .unwrap_or_else(|| defaults::WEEK_RATIONALE.to_string()),
        estimated_hours: raw
            .estimated_hours
            .unwrap_or(defaults::WEEK_ESTIMATED_HOURS),
        resources,
    }
}

fn map_resource(week_index: usize, resource_index: usize, raw: RawResource) -> Resource {
    let kind = raw
        .kind
        .as_deref()
        .map_or(ResourceKind::Other, ResourceKind::from_label);

    Resource {
        id: ResourceId::at(week_index, resource_index),
        kind,
        title: normalize_optional(raw.title)
            .unwrap_or_else(|| defaults::RESOURCE_TITLE.to_string()),
        search_query: normalize_optional(raw.search_query),
        estimated_time: normalize_optional(raw.estimated_time),
        url: normalize_optional(raw.url),
    }
}

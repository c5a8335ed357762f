//! Values substituted for fields the generator left out.

/// Estimated hours of a week without `estimated_hours`.
pub const WEEK_ESTIMATED_HOURS: f64 = 0.0;

/// Rationale of a week without `why_this_first`.
pub const WEEK_RATIONALE: &str = "";

/// Title of a resource without `title`.
pub const RESOURCE_TITLE: &str = "Untitled resource";

/// Goal used when neither the payload nor the caller provides one.
pub const PATH_GOAL: &str = "";

/// Title of a week without `topic`; numbered by position, not `week_number`.
#[must_use]
pub fn week_title(week_number: u32) -> String {
    format!("Week {week_number}")
}

/// Week number of an entry without a positive `week_number` (1-based position).
#[must_use]
pub fn week_number(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |index| index.saturating_add(1))
}

use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::ids::{ResourceId, WeekId};

/// Search endpoint used when a resource carries no direct link.
pub const RESOURCE_SEARCH_URL: &str = "https://www.google.com/search";

//
// ─── RESOURCE ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Youtube,
    Article,
    Documentation,
    #[default]
    Other,
}

impl ResourceKind {
    /// Maps a generator label onto a known kind. Unknown labels become `Other`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "youtube" | "video" => Self::Youtube,
            "article" => Self::Article,
            "documentation" | "docs" => Self::Documentation,
            _ => Self::Other,
        }
    }
}

/// A study resource attached to a week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub kind: ResourceKind,
    pub title: String,
    pub search_query: Option<String>,
    pub estimated_time: Option<String>,
    pub url: Option<String>,
}

impl Resource {
    /// True when the resource carries either a direct url or a search query.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        self.url.is_some() || self.search_query.is_some()
    }

    /// Link to open for this resource.
    ///
    /// The direct url wins when it parses; otherwise a web search for the
    /// search query, or for the title when no query was supplied.
    #[must_use]
    pub fn link(&self) -> Option<Url> {
        if let Some(url) = self.url.as_deref().and_then(|raw| Url::parse(raw).ok()) {
            return Some(url);
        }
        let query = self.search_query.as_deref().unwrap_or(&self.title);
        Url::parse_with_params(RESOURCE_SEARCH_URL, &[("q", query)]).ok()
    }
}

//
// ─── WEEK ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    pub id: WeekId,
    pub week_number: u32,
    pub title: String,
    pub topics: Vec<String>,
    /// Why this week comes at this point of the curriculum.
    pub rationale: String,
    pub estimated_hours: f64,
    pub resources: Vec<Resource>,
}

//
// ─── LEARNING PATH ─────────────────────────────────────────────────────────────
//

/// Canonical learning path read by every view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub goal: String,
    pub weeks: Vec<Week>,
    /// Total as reported by the generator; see `summed_week_hours` for the
    /// per-week sum, which may differ.
    pub total_hours: f64,
    pub prerequisites: Vec<String>,
    pub outcomes: Vec<String>,
    pub final_project: Option<String>,
}

impl LearningPath {
    #[must_use]
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    #[must_use]
    pub fn week(&self, id: &WeekId) -> Option<&Week> {
        self.weeks.iter().find(|week| &week.id == id)
    }

    #[must_use]
    pub fn summed_week_hours(&self) -> f64 {
        self.weeks.iter().map(|week| week.estimated_hours).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(url: Option<&str>, query: Option<&str>) -> Resource {
        Resource {
            id: ResourceId::at(0, 0),
            kind: ResourceKind::Article,
            title: "Rust Book".into(),
            search_query: query.map(str::to_string),
            estimated_time: None,
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn link_prefers_direct_url() {
        let res = resource(Some("https://doc.rust-lang.org/book/"), Some("rust book"));
        assert_eq!(res.link().unwrap().as_str(), "https://doc.rust-lang.org/book/");
        assert!(res.is_actionable());
    }

    #[test]
    fn link_falls_back_to_search_query_then_title() {
        let res = resource(None, Some("ownership basics"));
        assert_eq!(
            res.link().unwrap().as_str(),
            "https://www.google.com/search?q=ownership+basics"
        );

        let res = resource(None, None);
        assert!(!res.is_actionable());
        assert_eq!(
            res.link().unwrap().as_str(),
            "https://www.google.com/search?q=Rust+Book"
        );
    }

    #[test]
    fn kind_labels_map_to_known_kinds() {
        assert_eq!(ResourceKind::from_label("Video"), ResourceKind::Youtube);
        assert_eq!(ResourceKind::from_label("docs"), ResourceKind::Documentation);
        assert_eq!(ResourceKind::from_label("practice"), ResourceKind::Other);
    }
}

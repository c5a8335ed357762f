//! Application state for one client session.

use std::collections::BTreeSet;

use crate::model::{LearningPath, UserProfile, WeekId};

/// How the dashboard lays out the weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Timeline,
    Kanban,
}

/// State of the latest path generation request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// Every mutation the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetUserProfile(UserProfile),
    /// `None` means no path has been generated yet.
    SetLearningPath(Option<LearningPath>),
    /// Commit a successful generation: profile and path land together.
    ApplyGeneratedPath {
        profile: UserProfile,
        path: LearningPath,
    },
    ToggleWeekCompletion(WeekId),
    SetViewMode(ViewMode),
    SetRequestStatus(RequestStatus),
    Reset,
}

/// Owns the user profile, the learning path and the completed weeks.
///
/// The store is a plain value passed by reference to whoever needs it; all
/// writes go through [`ProgressStore::dispatch`] or the named helpers that wrap it.
/// Completed week ids are tracked apart from the path and survive a path
/// replacement; ids the current path does not contain are kept but never
/// counted towards progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressStore {
    profile: Option<UserProfile>,
    path: Option<LearningPath>,
    completed: BTreeSet<WeekId>,
    view_mode: ViewMode,
    status: RequestStatus,
}

impl ProgressStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SetUserProfile(profile) => self.profile = Some(profile),
            Action::SetLearningPath(path) => self.path = path,
            Action::ApplyGeneratedPath { profile, path } => {
                log::debug!(
                    "storing learning path with {} weeks for {:?}",
                    path.week_count(),
                    profile.target_goal()
                );
                self.profile = Some(profile);
                self.path = Some(path);
                self.status = RequestStatus::Idle;
            }
            Action::ToggleWeekCompletion(week_id) => {
                if !self.completed.remove(&week_id) {
                    self.completed.insert(week_id);
                }
            }
            Action::SetViewMode(mode) => self.view_mode = mode,
            Action::SetRequestStatus(status) => self.status = status,
            Action::Reset => *self = Self::default(),
        }
    }

    // ─── Actions ───────────────────────────────────────────────────────────────

    pub fn set_user_profile(&mut self, profile: UserProfile) {
        self.dispatch(Action::SetUserProfile(profile));
    }

    pub fn set_learning_path(&mut self, path: Option<LearningPath>) {
        self.dispatch(Action::SetLearningPath(path));
    }

    /// Flip the completion of a week; returns whether it is now completed.
    pub fn toggle_week_completion(&mut self, week_id: &WeekId) -> bool {
        self.dispatch(Action::ToggleWeekCompletion(week_id.clone()));
        self.is_week_completed(week_id)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.dispatch(Action::SetViewMode(mode));
    }

    pub fn set_request_status(&mut self, status: RequestStatus) {
        self.dispatch(Action::SetRequestStatus(status));
    }

    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
    }

    // ─── Reads ─────────────────────────────────────────────────────────────────

    #[must_use]
    pub fn user_profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn learning_path(&self) -> Option<&LearningPath> {
        self.path.as_ref()
    }

    /// Whether views that need a path can be shown; callers redirect to
    /// onboarding otherwise.
    #[must_use]
    pub fn has_learning_path(&self) -> bool {
        self.path.is_some()
    }

    #[must_use]
    pub fn completed_weeks(&self) -> &BTreeSet<WeekId> {
        &self.completed
    }

    #[must_use]
    pub fn is_week_completed(&self, week_id: &WeekId) -> bool {
        self.completed.contains(week_id)
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn request_status(&self) -> &RequestStatus {
        &self.status
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    /// Weeks of the current path that are completed.
    #[must_use]
    pub fn completed_week_count(&self) -> usize {
        self.path.as_ref().map_or(0, |path| {
            path.weeks
                .iter()
                .filter(|week| self.completed.contains(&week.id))
                .count()
        })
    }

    /// Share of the current path's weeks that are completed, in `[0, 100]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percentage(&self) -> f64 {
        let Some(path) = self.path.as_ref() else {
            return 0.0;
        };
        if path.weeks.is_empty() {
            return 0.0;
        }
        100.0 * self.completed_week_count() as f64 / path.weeks.len() as f64
    }

    /// Hours for the headline: the path total, else what the profile committed to.
    #[must_use]
    pub fn planned_hours(&self) -> f64 {
        match (&self.path, &self.profile) {
            (Some(path), _) if path.total_hours > 0.0 => path.total_hours,
            (_, Some(profile)) => f64::from(profile.planned_hours()),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LearningStyle, Week};

    fn build_path(weeks: u32) -> LearningPath {
        LearningPath {
            goal: "Build a SaaS app".into(),
            weeks: (1..=weeks)
                .map(|number| Week {
                    id: WeekId::for_week(number),
                    week_number: number,
                    title: format!("Week {number}"),
                    topics: Vec::new(),
                    rationale: String::new(),
                    estimated_hours: 6.0,
                    resources: Vec::new(),
                })
                .collect(),
            total_hours: 0.0,
            prerequisites: Vec::new(),
            outcomes: Vec::new(),
            final_project: None,
        }
    }

    fn build_profile() -> UserProfile {
        UserProfile::new(["HTML"], "Build a SaaS app", 6, 4, LearningStyle::HandsOn).unwrap()
    }

    #[test]
    fn progress_is_zero_without_path() {
        let mut store = ProgressStore::new();
        store.toggle_week_completion(&WeekId::for_week(1));

        assert!(!store.has_learning_path());
        assert!(store.progress_percentage().abs() < f64::EPSILON);
    }

    #[test]
    fn progress_is_zero_for_empty_path() {
        let mut store = ProgressStore::new();
        store.set_learning_path(Some(build_path(0)));
        assert!(store.progress_percentage().abs() < f64::EPSILON);
    }

    #[test]
    fn progress_counts_completed_weeks() {
        let mut store = ProgressStore::new();
        store.set_learning_path(Some(build_path(4)));

        assert!(store.toggle_week_completion(&WeekId::for_week(1)));
        assert!(store.toggle_week_completion(&WeekId::for_week(3)));

        assert_eq!(store.completed_week_count(), 2);
        assert!((store.progress_percentage() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn toggle_twice_restores_completion_set() {
        let mut store = ProgressStore::new();
        store.set_learning_path(Some(build_path(2)));
        store.toggle_week_completion(&WeekId::for_week(2));
        let before = store.completed_weeks().clone();

        assert!(store.toggle_week_completion(&WeekId::for_week(1)));
        assert!(!store.toggle_week_completion(&WeekId::for_week(1)));
        assert_eq!(store.completed_weeks(), &before);
    }

    #[test]
    fn stale_completions_are_kept_but_not_counted() {
        let mut store = ProgressStore::new();
        store.set_learning_path(Some(build_path(4)));
        store.toggle_week_completion(&WeekId::for_week(4));

        store.set_learning_path(Some(build_path(2)));
        assert!(store.is_week_completed(&WeekId::for_week(4)));
        assert!(store.progress_percentage().abs() < f64::EPSILON);

        store.toggle_week_completion(&WeekId::for_week(1));
        store.toggle_week_completion(&WeekId::for_week(2));
        assert!((store.progress_percentage() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reset_clears_everything() {
        let mut store = ProgressStore::new();
        store.dispatch(Action::ApplyGeneratedPath {
            profile: build_profile(),
            path: build_path(3),
        });
        store.toggle_week_completion(&WeekId::for_week(1));
        store.set_view_mode(ViewMode::Kanban);
        store.set_request_status(RequestStatus::Failed("boom".into()));

        store.reset();

        assert_eq!(store, ProgressStore::new());
        assert!(store.user_profile().is_none());
        assert!(store.completed_weeks().is_empty());
        assert_eq!(store.view_mode(), ViewMode::Timeline);
    }

    #[test]
    fn generated_path_commits_profile_and_clears_status() {
        let mut store = ProgressStore::new();
        store.set_request_status(RequestStatus::Loading);
        assert!(store.is_loading());

        store.dispatch(Action::ApplyGeneratedPath {
            profile: build_profile(),
            path: build_path(4),
        });

        assert_eq!(store.request_status(), &RequestStatus::Idle);
        assert_eq!(store.user_profile().map(UserProfile::hours_per_week), Some(6));
        assert_eq!(store.learning_path().map(LearningPath::week_count), Some(4));
    }

    #[test]
    fn planned_hours_falls_back_to_profile() {
        let mut store = ProgressStore::new();
        store.set_user_profile(build_profile());
        store.set_learning_path(Some(build_path(4)));
        assert!((store.planned_hours() - 24.0).abs() < f64::EPSILON);

        let mut path = build_path(4);
        path.total_hours = 30.0;
        store.set_learning_path(Some(path));
        assert!((store.planned_hours() - 30.0).abs() < f64::EPSILON);
    }
}

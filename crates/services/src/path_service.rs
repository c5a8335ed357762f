use std::sync::Arc;

use pathway_core::model::{LearningPath, UserProfile};
use pathway_core::{Action, PathNormalizer, ProgressStore, RequestStatus};

use crate::api::{GeneratePathRequest, LearningPathApi};
use crate::error::PathServiceError;

/// Turns a submitted profile into a stored learning path.
#[derive(Clone)]
pub struct PathService {
    api: Arc<dyn LearningPathApi>,
}

impl PathService {
    #[must_use]
    pub fn new(api: Arc<dyn LearningPathApi>) -> Self {
        Self { api }
    }

    /// Request and normalize a path without touching any store.
    ///
    /// Concurrent calls are independent; when several race, whichever result
    /// the caller stores last wins.
    ///
    /// # Errors
    ///
    /// Returns `PathServiceError::Api` for transport failures and
    /// `PathServiceError::Normalization` for responses of unknown shape.
    pub async fn fetch(&self, profile: &UserProfile) -> Result<LearningPath, PathServiceError> {
        let request = GeneratePathRequest::from_profile(profile);
        let raw = self.api.generate_path(&request).await?;
        let path = PathNormalizer::new()
            .with_fallback_goal(profile.target_goal())
            .normalize(&raw)?;
        log::info!(
            "generated {} week path for {:?}",
            path.week_count(),
            profile.target_goal()
        );
        Ok(path)
    }

    /// Generate a path and commit it, with the profile, to the store.
    ///
    /// The store shows `Loading` while the request is in flight. On failure
    /// profile, path and completions are left as they were and the status
    /// becomes `Failed`. A caller that drops this future mid-flight should
    /// reset the status itself.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`PathService::fetch`].
    pub async fn generate(
        &self,
        store: &mut ProgressStore,
        profile: UserProfile,
    ) -> Result<(), PathServiceError> {
        store.set_request_status(RequestStatus::Loading);

        match self.fetch(&profile).await {
            Ok(path) => {
                store.dispatch(Action::ApplyGeneratedPath { profile, path });
                Ok(())
            }
            Err(err) => {
                log::warn!("learning path generation failed: {err}");
                store.set_request_status(RequestStatus::Failed(err.to_string()));
                Err(err)
            }
        }
    }
}

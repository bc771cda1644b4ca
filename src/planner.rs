//! Planner Controller
//!
//! The four user actions. Each mutating action ends by re-fetching the full
//! project list; the list is never patched locally.

use crate::api::{ApiClient, Transport};
use crate::dialogs::Dialogs;
use crate::error::{
    ApiError, ApiResult, CONNECTION_FAILED, CREATE_FAILED, DELETE_CONFIRM, DELETE_FAILED, LOAD_FAILED,
    VISIT_FAILED,
};
use crate::models::{PlaceId, ProjectId};
use crate::store::{PlannerState, StateHandle};

#[derive(Clone)]
pub struct Planner<T, S, D> {
    api: ApiClient<T>,
    state: S,
    dialogs: D,
}

/// User-facing text for a failed action
fn failure_message(err: &ApiError, fallback: &str) -> String {
    if err.is_transport() {
        CONNECTION_FAILED.to_string()
    } else {
        err.message_or(fallback)
    }
}

impl<T, S, D> Planner<T, S, D>
where
    T: Transport,
    S: StateHandle,
    D: Dialogs,
{
    pub fn new(api: ApiClient<T>, state: S, dialogs: D) -> Self {
        Self { api, state, dialogs }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Refresh. Replaces the list on success; sets the generic load error otherwise.
    pub async fn load_projects(&self) -> ApiResult<()> {
        match self.api.list_projects().await {
            Ok(projects) => {
                log::info!("loaded {} projects", projects.len());
                self.state.update_state(|s| s.replace_projects(projects));
                Ok(())
            }
            Err(e) => {
                log::warn!("project list refresh failed: {}", e);
                self.state.update_state(|s| s.set_error(LOAD_FAILED));
                Err(e)
            }
        }
    }

    /// Submit the current draft. The draft is kept on failure so it can be corrected.
    pub async fn create_project(&self) -> ApiResult<()> {
        let draft = self.state.read_state(|s| s.draft.clone());
        if !draft.is_submittable() {
            log::debug!("create skipped: name is empty");
            return Ok(());
        }

        self.state.update_state(PlannerState::clear_error);
        match self.api.create_project(&draft.to_args()).await {
            Ok(()) => {
                log::info!("created project {:?}", draft.name);
                self.state.update_state(PlannerState::reset_draft);
                // A failed refresh reports itself through the error banner
                let _ = self.load_projects().await;
                Ok(())
            }
            Err(e) => {
                log::warn!("create project failed: {}", e);
                let message = failure_message(&e, CREATE_FAILED);
                self.state.update_state(|s| s.set_error(message));
                Err(e)
            }
        }
    }

    /// Mark a place visited. Refreshes whatever the outcome, then reports a failure.
    pub async fn mark_visited(&self, place_id: PlaceId) -> ApiResult<()> {
        let result = self.api.visit_place(place_id).await;
        let _ = self.load_projects().await;

        if let Err(e) = &result {
            log::warn!("visit place {} failed: {}", place_id, e);
            self.dialogs.notify(&failure_message(e, VISIT_FAILED));
        }
        result
    }

    /// Delete after confirmation. Rejections are shown through the notification channel.
    pub async fn delete_project(&self, project_id: ProjectId) -> ApiResult<()> {
        if !self.dialogs.confirm(DELETE_CONFIRM) {
            log::debug!("delete project {} cancelled", project_id);
            return Ok(());
        }

        match self.api.delete_project(project_id).await {
            Ok(()) => {
                log::info!("deleted project {}", project_id);
                let _ = self.load_projects().await;
                Ok(())
            }
            Err(e) => {
                log::warn!("delete project {} failed: {}", project_id, e);
                self.dialogs.notify(&failure_message(&e, DELETE_FAILED));
                Err(e)
            }
        }
    }
}

//! Planner State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Project, ProjectDraft};

/// View state: last fetched projects, the form draft and the error banner
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct PlannerState {
    /// Exactly what the last successful list fetch returned
    pub projects: Vec<Project>,
    pub draft: ProjectDraft,
    /// Empty means no error
    pub error: String,
}

impl PlannerState {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn replace_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }

    /// After a successful create
    pub fn reset_draft(&mut self) {
        self.draft = ProjectDraft::default();
        self.error.clear();
    }
}

/// Type alias for the store
pub type PlannerStore = Store<PlannerState>;

/// Get the planner store from context
pub fn use_planner_store() -> PlannerStore {
    expect_context::<PlannerStore>()
}

/// Where the planner reads and writes its state
pub trait StateHandle {
    fn read_state<R>(&self, f: impl FnOnce(&PlannerState) -> R) -> R;
    fn update_state(&self, f: impl FnOnce(&mut PlannerState));
}

impl StateHandle for PlannerStore {
    fn read_state<R>(&self, f: impl FnOnce(&PlannerState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state(&self, f: impl FnOnce(&mut PlannerState)) {
        self.update(f);
    }
}

#[cfg(test)]
impl StateHandle for std::rc::Rc<std::cell::RefCell<PlannerState>> {
    fn read_state<R>(&self, f: impl FnOnce(&PlannerState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state(&self, f: impl FnOnce(&mut PlannerState)) {
        f(&mut self.borrow_mut());
    }
}

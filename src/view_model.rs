//! Rendering Rules
//!
//! What each card shows, decided from the fetched data alone.

use crate::models::{Place, Project};

pub const EMPTY_LIST: &str = "Список порожній. Створіть свій перший проект вище!";
pub const NO_PLACES: &str = "Немає картин у цьому плані";
pub const COMPLETED_BADGE: &str = "✅ Completed";
pub const VISIT_LABEL: &str = "Відвідати";
pub const VISITED_LABEL: &str = "✓ Відвідано";

/// Visit control for a place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceStatus {
    /// Show the "mark visited" button
    Visitable,
    /// Show the static indicator
    Visited,
}

impl PlaceStatus {
    pub fn of(place: &Place) -> Self {
        if place.is_visited {
            PlaceStatus::Visited
        } else {
            PlaceStatus::Visitable
        }
    }
}

/// Shown instead of the list when there are no projects
pub fn empty_list_placeholder(projects: &[Project]) -> Option<&'static str> {
    projects.is_empty().then_some(EMPTY_LIST)
}

pub fn completed_badge(project: &Project) -> Option<&'static str> {
    project.is_completed.then_some(COMPLETED_BADGE)
}

/// Shown instead of the places section when a project has none
pub fn places_placeholder(project: &Project) -> Option<&'static str> {
    project.places.is_empty().then_some(NO_PLACES)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub fn description_line(project: &Project) -> Option<String> {
    non_empty(&project.description).map(str::to_string)
}

pub fn date_line(project: &Project) -> Option<String> {
    non_empty(&project.start_date).map(|d| format!("📅 {}", d))
}

pub fn artwork_label(place: &Place) -> String {
    format!("🖼️ Artwork ID: {}", place.external_id)
}

pub fn place_notes(place: &Place) -> String {
    place.notes.clone().unwrap_or_default()
}

//! UI Components
//!
//! Leptos components for the form and the project list.

mod place_row;
mod project_card;
mod project_form;
mod project_list;

pub use place_row::PlaceRow;
pub use project_card::ProjectCard;
pub use project_form::ProjectForm;
pub use project_list::ProjectList;

//! Project List Component

use leptos::prelude::*;

use crate::components::ProjectCard;
use crate::store::{use_planner_store, PlannerStateStoreFields};
use crate::view_model::empty_list_placeholder;

/// Renders the last fetched list as-is, or a placeholder when it is empty
#[component]
pub fn ProjectList() -> impl IntoView {
    let store = use_planner_store();

    view! {
        <div class="projects-list">
            <h2 class="section-title">"Мої Подорожі"</h2>

            {move || {
                store
                    .projects()
                    .with(|p| empty_list_placeholder(p))
                    .map(|text| view! { <p class="list-empty">{text}</p> })
            }}

            // Keyed on the whole project so any server-side change re-renders its card
            <For
                each=move || store.projects().get()
                key=|project| project.clone()
                children=move |project| view! { <ProjectCard project=project /> }
            />
        </div>
    }
}

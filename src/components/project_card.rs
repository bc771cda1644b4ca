//! Project Card Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::PlaceRow;
use crate::context::use_planner;
use crate::models::Project;
use crate::view_model::{completed_badge, date_line, description_line, places_placeholder};

/// One travel plan with its places and a delete control
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let planner = use_planner();

    let id = project.id;
    let description = description_line(&project);
    let date = date_line(&project);
    let badge = completed_badge(&project);

    let delete_project = move |_| {
        let planner = planner.clone();
        spawn_local(async move {
            let _ = planner.delete_project(id).await;
        });
    };

    let places = if let Some(text) = places_placeholder(&project) {
        view! { <p class="places-empty">{text}</p> }.into_any()
    } else {
        project
            .places
            .into_iter()
            .map(|place| view! { <PlaceRow place=place /> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="project-card">
            <div class="project-header">
                <div class="project-title">
                    <h3>
                        {project.name}
                        {badge.map(|text| view! { <span class="badge-completed">{text}</span> })}
                    </h3>
                    {description.map(|d| view! { <p class="project-desc">{d}</p> })}
                    {date.map(|d| view! { <p class="project-date">{d}</p> })}
                </div>

                <button class="btn-delete" title="Видалити" on:click=delete_project>"🗑️"</button>
            </div>

            <div class="places-container">{places}</div>
        </div>
    }
}

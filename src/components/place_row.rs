//! Place Row Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_planner;
use crate::models::Place;
use crate::view_model::{artwork_label, place_notes, PlaceStatus, VISITED_LABEL, VISIT_LABEL};

/// A single artwork row with its visit control
#[component]
pub fn PlaceRow(place: Place) -> impl IntoView {
    let planner = use_planner();
    let id = place.id;

    let control = match PlaceStatus::of(&place) {
        PlaceStatus::Visitable => view! {
            <button class="btn-visit" on:click=move |_| {
                let planner = planner.clone();
                spawn_local(async move {
                    let _ = planner.mark_visited(id).await;
                });
            }>
                {VISIT_LABEL}
            </button>
        }
        .into_any(),
        PlaceStatus::Visited => view! { <div class="visited-status">{VISITED_LABEL}</div> }.into_any(),
    };

    view! {
        <div class="place-item">
            <div class="place-info">
                <strong>{artwork_label(&place)}</strong>
                <span>{place_notes(&place)}</span>
            </div>
            {control}
        </div>
    }
}

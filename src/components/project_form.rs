//! Project Form Component
//!
//! Form for creating a travel plan with an optional first artwork.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_planner;
use crate::store::{use_planner_store, PlannerStateStoreFields};

/// New project form. Field values live in the store draft.
#[component]
pub fn ProjectForm() -> impl IntoView {
    let store = use_planner_store();
    let planner = use_planner();

    let create_project = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let planner = planner.clone();
        spawn_local(async move {
            let _ = planner.create_project().await;
        });
    };

    view! {
        <div class="create-card">
            <div class="card-header">"➕ Нова подорож"</div>

            <form class="form-body" on:submit=create_project>
                <div class="input-group">
                    <label>"Назва проекту"</label>
                    <input
                        placeholder="Наприклад: Вікенд у Чикаго"
                        required=true
                        prop:value=move || store.draft().with(|d| d.name.clone())
                        on:input=move |ev| store.draft().write().name = event_target_value(&ev)
                    />
                </div>

                <div class="input-row">
                    <div class="input-group">
                        <label>"Опис"</label>
                        <input
                            placeholder="Коротка замітка"
                            prop:value=move || store.draft().with(|d| d.description.clone())
                            on:input=move |ev| store.draft().write().description = event_target_value(&ev)
                        />
                    </div>
                    <div class="input-group">
                        <label>"Дата"</label>
                        <input
                            type="date"
                            prop:value=move || store.draft().with(|d| d.start_date.clone())
                            on:input=move |ev| store.draft().write().start_date = event_target_value(&ev)
                        />
                    </div>
                </div>

                <div class="input-group">
                    <label>"Додати картину (ID)"</label>
                    <input
                        placeholder="Наприклад: 27992"
                        prop:value=move || store.draft().with(|d| d.art_id.clone())
                        on:input=move |ev| store.draft().write().art_id = event_target_value(&ev)
                    />
                </div>

                <button type="submit" class="btn-submit">"Створити маршрут"</button>

                {move || {
                    let error = store.error().get();
                    (!error.is_empty()).then(|| view! { <div class="error-msg">"⚠️ " {error}</div> })
                }}
            </form>
        </div>
    }
}

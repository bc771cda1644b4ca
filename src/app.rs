//! Travel Planner App
//!
//! Header, the new-project form and the project list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ProjectForm, ProjectList};
use crate::config::ApiConfig;
use crate::context::new_app_planner;
use crate::store::PlannerState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(PlannerState::default());
    let planner = new_app_planner(ApiConfig::from_env(), store);

    // Provide context to all children
    provide_context(store);
    provide_context(planner.clone());

    // Load projects on mount
    Effect::new(move |_| {
        let planner = planner.clone();
        spawn_local(async move {
            let _ = planner.load_projects().await;
        });
    });

    view! {
        <main class="container">
            <div class="header">
                <h1>"✈️ Travel Planner"</h1>
                <p>"Плануй свої культурні подорожі до музею Чикаго"</p>
            </div>

            <ProjectForm />

            <ProjectList />
        </main>
    }
}

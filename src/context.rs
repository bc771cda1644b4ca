//! Application Context
//!
//! The planner controller shared with components via Leptos Context API.

use leptos::prelude::*;

use crate::api::{ApiClient, FetchTransport};
use crate::config::ApiConfig;
use crate::dialogs::BrowserDialogs;
use crate::planner::Planner;
use crate::store::PlannerStore;

/// Planner wired to the browser: fetch, the reactive store and native dialogs
pub type AppPlanner = Planner<FetchTransport, PlannerStore, BrowserDialogs>;

pub fn new_app_planner(config: ApiConfig, store: PlannerStore) -> AppPlanner {
    log::info!("backend origin: {}", config.base_url);
    Planner::new(ApiClient::new(FetchTransport::new(config)), store, BrowserDialogs)
}

/// Get the planner from context
pub fn use_planner() -> AppPlanner {
    expect_context::<AppPlanner>()
}

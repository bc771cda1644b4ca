//! Travel Planner Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dialogs;
mod error;
mod logging;
mod models;
mod planner;
mod store;
mod view_model;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}

//! PantryGhost Frontend Entry Point

mod models;
mod config;
mod remote;
mod pantry;
mod controller;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load_from_page();
    let config = loaded.as_ref().ok().cloned().unwrap_or_default();
    console_logger::init(config.max_level());
    if let Err(e) = loaded {
        tracing::error!("[CONFIG] {}; using defaults", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}

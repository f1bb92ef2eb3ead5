//! Item Picker Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod models;
mod store;
mod window;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load();
    logging::init(config.log_level());
    log::info!(target: "app", "item service at {}", config.base_url);

    mount_to_body(move || view! { <App config=config /> });
}

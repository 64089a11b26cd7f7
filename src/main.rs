//! Data Viewer Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod datetime;
mod loader;
mod models;
mod store;
mod view_model;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = console_logger::init(config.log_level) {
        // Another logger is already installed; it receives this warning
        log::warn!("Console logger not installed: {}", e);
    }
    log::info!("Mounting app, backend at {}", config.api.base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}

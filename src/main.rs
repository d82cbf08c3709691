//! Member Search Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod edit;
mod error;
mod logging;
mod models;
mod search;
mod store;
mod toast;

#[cfg(test)]
mod tests;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    logging::init(config.log_level);
    log::info!("[APP] member search starting, backend {}", config.api_base_url);
    mount_to_body(move || view! { <App config=config.clone() /> });
}

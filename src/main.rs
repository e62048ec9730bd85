//! Kangyur Browser Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod routing;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(err) = console_logger::init_logger("Kangyur", config.log_level) {
        web_sys::console::error_1(&format!("logger already initialized: {}", err).into());
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}

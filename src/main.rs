//! Todo App Frontend Entry Point

mod models;
mod reducer;
mod filter;
mod input;
mod windowing;
mod config;
mod debug_hook;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    match rolling_logger::init(config::log_level(), config::LOG_CAPACITY) {
        Ok(ring) => debug_hook::expose_logs(ring),
        Err(e) => web_sys::console::error_1(&format!("[APP] logger not installed: {}", e).into()),
    }
    tracing::info!("[APP] mounting todo app");

    mount_to_body(App);
}

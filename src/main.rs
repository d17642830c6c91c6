//! Task Board Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod models;
mod state;
mod task_sections;
mod tree;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    tracing::info!("task board starting");
    mount_to_body(App);
}

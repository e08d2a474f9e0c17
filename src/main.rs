//! PE Agent Frontend Entry Point

mod models;
mod config;
mod auth;
mod store;
mod context;
mod routes;
mod catalog;
mod paragraphs;
mod assistant;
mod components;
mod app;


use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("[APP] Mounting");
    mount_to_body(App);
}

//! Activity Board Frontend Entry Point

mod api;
mod app;
mod board;
mod components;
mod config;
mod context;
mod error;
mod message;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

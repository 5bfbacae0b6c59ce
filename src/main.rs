//! Console Entry Point

mod app;
mod calendar;
mod components;
mod data;
mod filter;
mod format;
mod import;
mod models;
mod stats;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

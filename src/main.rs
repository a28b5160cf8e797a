//! Collective Page Frontend Entry Point

mod app;
mod components;
mod context;
mod logger;
mod page_data;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    mount_to_body(App);
}

//! Lost & Found Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod display;
mod logger;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info });
    mount_to_body(App);
}

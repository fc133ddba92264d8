use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod config;
mod error;
mod hooks;
mod shared;
mod state;
mod utils;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(config::log_level()).expect("logger");
    dioxus::launch(app::App);
}

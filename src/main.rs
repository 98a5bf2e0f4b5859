//! Digimon Field Guide Entry Point

mod app;
mod catalog;
mod components;
mod context;
mod filter;
mod icons;
mod models;
mod storage;
mod store;
mod summary;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

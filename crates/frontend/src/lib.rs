pub mod app;
pub mod boot;
pub mod config;
pub mod pages;
pub mod shared;
pub mod sync;

use config::DashboardConfig;
use shared::dom::web::WebDocument;
use std::cell::Cell;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn enhance() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Some(document) = WebDocument::current() else {
        return;
    };
    let config = DashboardConfig::load(&document);
    log::set_max_level(config.log_level().to_level_filter());

    if document.0.ready_state() == "loading" {
        let pending = Cell::new(Some((document.clone(), config)));
        document.on("DOMContentLoaded", move |_: web_sys::Event| {
            if let Some((document, config)) = pending.take() {
                boot::boot(document, &config);
            }
        });
    } else {
        boot::boot(document, &config);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    enhance();
}

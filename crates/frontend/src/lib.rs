pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = shared::config::load_config();

    // initializes logging using the `log` crate
    let level = config
        .as_ref()
        .map(|c| c.log.level())
        .unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    match config {
        Ok(config) => leptos::mount::mount_to_body(move || view! { <App config=config /> }),
        Err(err) => log::error!("invalid application config: {err:#}"),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

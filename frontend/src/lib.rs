use wasm_bindgen::prelude::wasm_bindgen;

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

/// Entry point when loaded as a wasm-bindgen module.
#[wasm_bindgen(start)]
pub fn start() {
    boot();
}

pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting leavekeeper frontend");

    // Resolve runtime config before mounting so the first fetch and the
    // change feed share the same base url.
    leptos::spawn_local(async {
        config::init().await;
        log::info!("runtime config initialized");
        router::mount_app();
    });
}

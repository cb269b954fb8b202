//! # riverwatts-client
//!
//! Leptos front-end for the RiverWatts marketing site and the role-gated
//! admin and customer dashboards.
//!
//! Compiled twice: with `ssr` it is linked into the server for rendering,
//! with `hydrate` it is built to WASM and takes over the server-rendered
//! page in the browser. Browser-only glue is behind `#[cfg(feature = "hydrate")]`.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point called by the generated loader script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}

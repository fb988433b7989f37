//! # client
//!
//! Leptos + WASM front end for the design tradespace: the design detail
//! view, the server-paginated tradespace table and the cost/value chart.
//!
//! Rendered on the server by the host crate (`ssr`) and hydrated in the
//! browser (`hydrate`), where all HTTP calls happen.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point called by the generated JS glue.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}

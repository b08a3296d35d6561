//! # client
//!
//! Leptos + WASM frontend for the picmark annotation editor: the page shell,
//! toolbar command surface, save call, and the `EditorHost` bridge into the
//! imperative canvas engine provided by the `editor` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

//! Edutalks - marketing site and admin console
//!
//! Server-rendered with Leptos and hydrated in the browser. All data
//! lives behind an external REST API; this crate only renders pages,
//! runs the motion layer and talks to that API.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

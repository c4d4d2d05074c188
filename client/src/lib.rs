//! # client
//!
//! Leptos + WASM front-end for the HireTeach marketplace.
//!
//! Pages, components and browser-side state live here. Everything that talks
//! to the backend (session, HTTP client, remote resources, route guard) comes
//! from the `market` crate so the CLI and the browser share one behaviour.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and mounts [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}

//! # client
//!
//! Leptos + WASM frontend for the dispute desk: customer intake chat,
//! analyst dashboard, and customer resolution screen behind a single shell.
//!
//! Domain rules (risk bands, queue filtering, transcript copy) live in the
//! `cases` crate; this crate owns reactive state, rendering, and the browser
//! calls to the server API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

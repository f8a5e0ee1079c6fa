//! # client
//!
//! Leptos + WASM frontend for the Coding Conf ticket generator.
//!
//! A single registration form (avatar, name, email, GitHub handle) validated
//! in the browser, and a ticket page fed by an in-memory hand-off. The crate
//! renders on the server under the `ssr` feature and hydrates in the browser
//! under `hydrate`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating ticket generator");
    leptos::mount::hydrate_body(app::App);
}

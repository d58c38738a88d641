//! # forum
//!
//! Leptos + WASM front end for a small forum: posts with optional images,
//! likes, and comments. Persistence, auth, and storage live in an external
//! PostgREST/GoTrue backend reached over HTTP.
//!
//! This crate contains pages, components, client-side state (including the
//! keyed query cache), the backend data client, and the interaction flows that
//! tie mutations to cache invalidation.

pub mod app;
pub mod components;
pub mod config;
pub mod interactions;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the root component.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}

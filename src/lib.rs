//! # eventa-ui
//!
//! Leptos + WASM frontend for the Eventa ticketing site.
//!
//! This crate contains pages, components, application state, and the
//! browser glue for the persisted display-mode toggle, the responsive
//! navbar with its dropdowns, and the support-chat scroll follow. It is
//! rendered client-side via Trunk; built without the `csr` feature every
//! browser call is a safe no-op so the crate compiles and tests on the
//! host.

pub mod app;
pub mod components;
pub mod consts;
pub mod pages;
pub mod state;
pub mod util;

pub use app::run_app;

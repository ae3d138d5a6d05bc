//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `window`/`document` lives here behind the `csr`
//! feature, so pages and components stay testable on the host.

pub mod scroll;
pub mod theme;
pub mod viewport;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Split by domain: `ui` holds the chrome flags (display mode, menu,
//! dropdowns), `chat` the support transcript, `catalog` the static event
//! data. `ui` and `chat` are provided to the tree as `RwSignal` contexts;
//! the catalog is plain const data.

pub mod catalog;
pub mod chat;
pub mod ui;

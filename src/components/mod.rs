//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chrome (navbar, footer, dropdowns) and the support chat live here; each
//! component reads and writes the shared state signals it is handed via
//! context rather than owning state of its own.

pub mod chat_panel;
pub mod dropdown;
pub mod event_card;
pub mod footer;
pub mod navbar;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are thin: static copy plus composition of `components`. None of
//! them hold state; the contact page only mounts the chat panel.

pub mod about;
pub mod contact;
pub mod events;
pub mod home;
pub mod tickets;

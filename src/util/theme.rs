//! Display-mode initialization, application, and toggle.
//!
//! Reads the persisted preference from `localStorage` and mirrors it as a
//! `data-theme` attribute on the `<html>` element. Toggle reads the live
//! attribute, flips it, writes the preference back, and re-applies the
//! attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; host-side
//! paths safely no-op and report light mode so tests stay deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::ThemeMode;

/// Read the persisted display-mode preference from `localStorage`.
///
/// Absent or unrecognized values fall back to light.
pub fn load_preference() -> ThemeMode {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(val)) = storage.get_item(crate::consts::THEME_STORAGE_KEY) {
                    return ThemeMode::parse(&val);
                }
            }
        }
        ThemeMode::Light
    }
    #[cfg(not(feature = "csr"))]
    {
        ThemeMode::Light
    }
}

/// Read the mode currently shown on the root element's `data-theme`
/// attribute, light if the attribute is unset.
pub fn current_mode() -> ThemeMode {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.get_attribute(crate::consts::THEME_ATTRIBUTE))
            .map_or(ThemeMode::Light, |val| ThemeMode::parse(&val))
    }
    #[cfg(not(feature = "csr"))]
    {
        ThemeMode::Light
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute(crate::consts::THEME_ATTRIBUTE, mode.as_str());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = mode;
    }
}

/// Flip the mode shown on the root element, persist the choice, and apply
/// it. Returns the new mode.
///
/// Reads the live attribute rather than cached state, so each call flips
/// exactly once even if something else rewrote the attribute.
pub fn toggle() -> ThemeMode {
    let next = current_mode().toggled();
    persist(next);
    apply(next);
    next
}

/// Load the persisted preference and apply it. Returns the applied mode.
pub fn init() -> ThemeMode {
    let mode = load_preference();
    apply(mode);
    mode
}

fn persist(mode: ThemeMode) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let value = mode.as_str();
                if storage.set_item(crate::consts::THEME_STORAGE_KEY, value).is_err() {
                    log::warn!("failed to persist display mode {value}");
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = mode;
    }
}

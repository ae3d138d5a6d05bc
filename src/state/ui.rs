#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::HashSet;

/// UI chrome state for the display mode, mobile menu, and navbar dropdowns.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: ThemeMode,
    pub menu_open: bool,
    pub open_dropdowns: HashSet<DropdownId>,
}

impl UiState {
    /// Flip the mobile menu between open and closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Force the mobile menu closed. Dropdowns are left alone; the resize
    /// correction only concerns the menu.
    pub fn collapse_for_desktop(&mut self) {
        self.menu_open = false;
    }

    /// Flip one dropdown's panel. Other panels are untouched, so two
    /// triggers clicked in sequence leave both panels open.
    pub fn toggle_dropdown(&mut self, id: DropdownId) {
        if !self.open_dropdowns.remove(&id) {
            self.open_dropdowns.insert(id);
        }
    }

    /// Close every dropdown panel, clicked or not.
    pub fn close_dropdowns(&mut self) {
        self.open_dropdowns.clear();
    }

    /// Whether a dropdown's panel is currently open.
    pub fn dropdown_open(&self, id: DropdownId) -> bool {
        self.open_dropdowns.contains(&id)
    }
}

/// The persisted display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The literal stored in `localStorage` and mirrored on the root
    /// element's `data-theme` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or attribute value. Anything other than `"dark"`
    /// (including an absent or unrecognized value) is light.
    pub fn parse(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    /// The opposite mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the theme-toggle control: sun while dark, moon while
    /// light.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Navbar dropdowns, one id per trigger/panel pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropdownId {
    Events,
    About,
}

/// Glyph shown on the menu-toggle control, strictly a function of the
/// resulting open state.
pub const fn menu_icon(open: bool) -> &'static str {
    if open { "✕" } else { "☰" }
}

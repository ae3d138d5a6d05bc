//! Shared constants for theming, responsive layout, and scroll-follow.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the persisted display mode.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Root-element attribute the stylesheets key off for light/dark rendering.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// ── Responsive layout ───────────────────────────────────────────

/// Viewport width at or below which the navbar collapses behind the
/// hamburger control.
pub const MOBILE_BREAKPOINT_PX: u32 = 860;

/// Media query matching the collapsed-navbar range. Must agree with
/// [`MOBILE_BREAKPOINT_PX`].
pub const NARROW_VIEWPORT_QUERY: &str = "(max-width: 860px)";

// ── Scroll-follow ───────────────────────────────────────────────

/// How close to its bottom edge (in px) the chat panel may sit and still
/// count as "near bottom" for auto-follow.
pub const NEAR_BOTTOM_THRESHOLD_PX: i32 = 80;

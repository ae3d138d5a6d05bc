//! Scroll-follow math and the smooth scroll-to-bottom action.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::NEAR_BOTTOM_THRESHOLD_PX;

/// Distance in px between the panel's visible bottom edge and its true
/// bottom edge. Zero when fully scrolled down.
pub const fn distance_to_bottom(scroll_top: i32, scroll_height: i32, client_height: i32) -> i32 {
    scroll_height - scroll_top - client_height
}

/// Whether the panel sits close enough to its bottom edge that following
/// new content will not yank the reader away from older messages.
pub const fn near_bottom(scroll_top: i32, scroll_height: i32, client_height: i32) -> bool {
    distance_to_bottom(scroll_top, scroll_height, client_height) < NEAR_BOTTOM_THRESHOLD_PX
}

/// Decision for one scroll-follow pass: forced calls always scroll,
/// unforced calls only when already near the bottom.
pub const fn should_follow(
    force: bool,
    scroll_top: i32,
    scroll_height: i32,
    client_height: i32,
) -> bool {
    force || near_bottom(scroll_top, scroll_height, client_height)
}

/// Smoothly scroll `panel` so its bottom edge lines up with the viewport
/// bottom, subject to [`should_follow`].
#[cfg(feature = "csr")]
pub fn scroll_to_bottom(panel: &web_sys::Element, force: bool) {
    let scroll_height = panel.scroll_height();
    if should_follow(force, panel.scroll_top(), scroll_height, panel.client_height()) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(f64::from(scroll_height));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        panel.scroll_to_with_scroll_to_options(&options);
    }
}

use super::*;

// =============================================================
// Near-bottom heuristic
// =============================================================

#[test]
fn far_from_bottom_is_not_near() {
    // scrollHeight 1000, scrollTop 500, clientHeight 400: 100 px remain.
    assert_eq!(distance_to_bottom(500, 1000, 400), 100);
    assert!(!near_bottom(500, 1000, 400));
}

#[test]
fn within_threshold_is_near() {
    // Same panel scrolled 50 px further: 50 px remain.
    assert_eq!(distance_to_bottom(550, 1000, 400), 50);
    assert!(near_bottom(550, 1000, 400));
}

#[test]
fn threshold_boundary_is_exclusive() {
    // Exactly 80 px away does not count as near.
    assert!(!near_bottom(520, 1000, 400));
    assert!(near_bottom(521, 1000, 400));
}

#[test]
fn fully_scrolled_panel_is_near() {
    assert_eq!(distance_to_bottom(600, 1000, 400), 0);
    assert!(near_bottom(600, 1000, 400));
}

#[test]
fn empty_panel_is_near() {
    assert!(near_bottom(0, 0, 0));
}

// =============================================================
// Follow decision
// =============================================================

#[test]
fn unforced_follow_respects_the_heuristic() {
    assert!(!should_follow(false, 500, 1000, 400));
    assert!(should_follow(false, 550, 1000, 400));
}

#[test]
fn forced_follow_scrolls_from_anywhere() {
    assert!(should_follow(true, 500, 1000, 400));
    assert!(should_follow(true, 0, 1000, 400));
}

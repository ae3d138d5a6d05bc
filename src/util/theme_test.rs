#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn load_preference_is_light_outside_a_browser() {
    assert_eq!(load_preference(), ThemeMode::Light);
}

#[test]
fn current_mode_is_light_outside_a_browser() {
    assert_eq!(current_mode(), ThemeMode::Light);
}

#[test]
fn init_applies_and_returns_light_outside_a_browser() {
    assert_eq!(init(), ThemeMode::Light);
}

#[test]
fn toggle_flips_from_the_live_mode() {
    // The live mode reads as light here, so toggle lands on dark.
    assert_eq!(toggle(), ThemeMode::Dark);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(ThemeMode::Light);
    apply(ThemeMode::Dark);
}

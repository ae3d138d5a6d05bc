use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_theme_is_light() {
    let state = UiState::default();
    assert_eq!(state.theme, ThemeMode::Light);
}

#[test]
fn ui_state_default_menu_closed_no_dropdowns() {
    let state = UiState::default();
    assert!(!state.menu_open);
    assert!(state.open_dropdowns.is_empty());
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn theme_mode_as_str_round_trips_through_parse() {
    assert_eq!(ThemeMode::parse(ThemeMode::Light.as_str()), ThemeMode::Light);
    assert_eq!(ThemeMode::parse(ThemeMode::Dark.as_str()), ThemeMode::Dark);
}

#[test]
fn theme_mode_parse_defaults_to_light() {
    assert_eq!(ThemeMode::parse(""), ThemeMode::Light);
    assert_eq!(ThemeMode::parse("Dark"), ThemeMode::Light);
    assert_eq!(ThemeMode::parse("solarized"), ThemeMode::Light);
}

#[test]
fn theme_mode_toggle_parity_over_many_clicks() {
    let mut mode = ThemeMode::Light;
    for clicks in 1..=8 {
        mode = mode.toggled();
        if clicks % 2 == 0 {
            assert_eq!(mode, ThemeMode::Light);
        } else {
            assert_eq!(mode, ThemeMode::Dark);
        }
    }
}

#[test]
fn theme_mode_icon_shows_sun_while_dark() {
    assert_eq!(ThemeMode::Dark.icon(), "☀");
    assert_eq!(ThemeMode::Light.icon(), "☾");
}

#[test]
fn theme_mode_icon_is_stable_under_reapply() {
    // Applying the same mode twice changes nothing.
    assert_eq!(ThemeMode::Dark.icon(), ThemeMode::Dark.icon());
    assert_eq!(ThemeMode::Light.as_str(), ThemeMode::Light.as_str());
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggle_menu_flips_open_state() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn menu_icon_mirrors_resulting_state() {
    assert_eq!(menu_icon(true), "✕");
    assert_eq!(menu_icon(false), "☰");
}

#[test]
fn collapse_for_desktop_closes_regardless_of_toggle_count() {
    let mut state = UiState::default();
    for _ in 0..3 {
        state.toggle_menu();
    }
    assert!(state.menu_open);

    state.collapse_for_desktop();
    assert!(!state.menu_open);
    assert_eq!(menu_icon(state.menu_open), "☰");

    // One-way correction: repeating it never reopens the menu.
    state.collapse_for_desktop();
    assert!(!state.menu_open);
}

#[test]
fn collapse_for_desktop_leaves_dropdowns_alone() {
    let mut state = UiState::default();
    state.toggle_dropdown(DropdownId::Events);
    state.toggle_menu();

    state.collapse_for_desktop();
    assert!(state.dropdown_open(DropdownId::Events));
}

// =============================================================
// Dropdowns
// =============================================================

#[test]
fn toggle_dropdown_opens_then_closes_one_panel() {
    let mut state = UiState::default();
    state.toggle_dropdown(DropdownId::Events);
    assert!(state.dropdown_open(DropdownId::Events));
    assert!(!state.dropdown_open(DropdownId::About));

    state.toggle_dropdown(DropdownId::Events);
    assert!(!state.dropdown_open(DropdownId::Events));
}

#[test]
fn sequential_triggers_leave_both_panels_open() {
    // Trigger clicks never reach the document-level dismiss, so opening the
    // second dropdown does not close the first.
    let mut state = UiState::default();
    state.toggle_dropdown(DropdownId::Events);
    state.toggle_dropdown(DropdownId::About);
    assert!(state.dropdown_open(DropdownId::Events));
    assert!(state.dropdown_open(DropdownId::About));
}

#[test]
fn close_dropdowns_closes_all_panels_including_unclicked() {
    let mut state = UiState::default();
    state.toggle_dropdown(DropdownId::Events);
    state.toggle_dropdown(DropdownId::About);

    state.close_dropdowns();
    assert!(!state.dropdown_open(DropdownId::Events));
    assert!(!state.dropdown_open(DropdownId::About));
    assert!(state.open_dropdowns.is_empty());
}

#[test]
fn close_dropdowns_is_a_noop_when_nothing_is_open() {
    let mut state = UiState::default();
    state.close_dropdowns();
    assert!(state.open_dropdowns.is_empty());
}

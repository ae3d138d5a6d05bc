//! Navbar dropdown: a trigger button plus a collapsible panel of links.

use leptos::prelude::*;

use crate::state::ui::{DropdownId, UiState};

/// One navbar dropdown.
///
/// The trigger click stops propagation so it never reaches the
/// document-level dismiss; only that one click is exempt, so opening this
/// dropdown leaves any other open panel alone.
#[component]
pub fn NavDropdown(id: DropdownId, label: &'static str, children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let panel_class = move || {
        if ui.get().dropdown_open(id) {
            "dropdown__panel is-open"
        } else {
            "dropdown__panel"
        }
    };

    view! {
        <div class="dropdown">
            <button
                class="dropdown__trigger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ui.update(|u| u.toggle_dropdown(id));
                }
            >
                {label}
                <span class="dropdown__caret">"▾"</span>
            </button>
            <div class=panel_class>{children()}</div>
        </div>
    }
}

//! Site navbar: brand, responsive link list, dropdowns, and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the chrome-level interaction wiring: the hamburger menu for narrow
//! viewports, the document-level dropdown dismiss, and the resize correction
//! that force-closes the mobile menu when the layout switches to desktop.

use leptos::prelude::*;

use crate::components::dropdown::NavDropdown;
use crate::state::ui::{DropdownId, UiState, menu_icon};

/// Top navigation bar, mounted once in the app shell.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "csr")]
    {
        wire_global_dismiss(ui);
        wire_desktop_correction(ui);
    }

    let on_toggle_theme = move |_| {
        let next = crate::util::theme::toggle();
        ui.update(|u| u.theme = next);
    };

    let on_toggle_menu = move |_| {
        ui.update(|u| u.toggle_menu());
    };

    // Route changes do not reload the page, so following a link closes the
    // mobile menu explicitly.
    let close_menu = move |_| {
        ui.update(|u| u.menu_open = false);
    };

    let links_class = move || {
        if ui.get().menu_open {
            "navbar__links is-open"
        } else {
            "navbar__links"
        }
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/" on:click=close_menu>
                "Eventa"
            </a>

            <nav class=links_class>
                <a href="/" on:click=close_menu>
                    "Home"
                </a>
                <NavDropdown id=DropdownId::Events label="Events">
                    <a href="/events" on:click=close_menu>
                        "All events"
                    </a>
                    <a href="/my-tickets" on:click=close_menu>
                        "My tickets"
                    </a>
                    <a href="/my-reservations" on:click=close_menu>
                        "My reservations"
                    </a>
                </NavDropdown>
                <NavDropdown id=DropdownId::About label="About">
                    <a href="/about" on:click=close_menu>
                        "About us"
                    </a>
                    <a href="/terms" on:click=close_menu>
                        "Terms"
                    </a>
                    <a href="/privacy" on:click=close_menu>
                        "Privacy"
                    </a>
                </NavDropdown>
                <a href="/contact" on:click=close_menu>
                    "Contact"
                </a>
            </nav>

            <button
                class="btn navbar__theme-toggle"
                on:click=on_toggle_theme
                title="Toggle display mode"
            >
                {move || ui.get().theme.icon()}
            </button>

            <button class="btn navbar__menu-toggle" on:click=on_toggle_menu title="Toggle menu">
                {move || menu_icon(ui.get().menu_open)}
            </button>
        </header>
    }
}

/// Close every dropdown panel when a click reaches the document. Trigger
/// clicks stop propagation, so only clicks outside a trigger land here.
#[cfg(feature = "csr")]
fn wire_global_dismiss(ui: RwSignal<UiState>) {
    use wasm_bindgen::{JsCast, closure::Closure};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        ui.update(|u| u.close_dropdowns());
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = document.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Force the mobile menu closed whenever the viewport leaves the narrow
/// range. One-way: nothing happens while the viewport stays narrow.
#[cfg(feature = "csr")]
fn wire_desktop_correction(ui: RwSignal<UiState>) {
    use wasm_bindgen::{JsCast, closure::Closure};

    let Some(window) = web_sys::window() else {
        return;
    };

    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if !crate::util::viewport::is_narrow_viewport() {
            ui.update(|u| u.collapse_for_desktop());
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
    cb.forget();
}

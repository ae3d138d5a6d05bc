//! Site footer with secondary navigation links.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Bottom bar with company and legal links.
#[component]
pub fn Footer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Footer links navigate in-page too, so they close the mobile menu the
    // same way navbar links do.
    let close_menu = move |_| {
        ui.update(|u| u.menu_open = false);
    };

    view! {
        <footer class="footer">
            <span class="footer__brand">"Eventa"</span>
            <nav class="footer__links">
                <a href="/about" on:click=close_menu>
                    "About us"
                </a>
                <a href="/terms" on:click=close_menu>
                    "Terms"
                </a>
                <a href="/privacy" on:click=close_menu>
                    "Privacy"
                </a>
                <a href="/contact" on:click=close_menu>
                    "Contact"
                </a>
            </nav>
        </footer>
    }
}

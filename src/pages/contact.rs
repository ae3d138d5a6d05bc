//! Contact page hosting the support chat.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;

/// Contact page — support chat plus a short note on other channels.
#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <header class="contact-page__header">
                <h1>"Contact us"</h1>
                <p>"Chat with support below, or write to hello@eventa.example."</p>
            </header>
            <ChatPanel/>
        </div>
    }
}

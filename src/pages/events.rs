//! Catalog page listing every event.

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::state::catalog;

/// Events page — the full catalog, soonest first.
#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <div class="events-page">
            <header class="events-page__header">
                <h1>"All events"</h1>
            </header>
            <div class="events-page__grid">
                {catalog::SAMPLE_EVENTS
                    .iter()
                    .map(|&event| view! { <EventCard event=event/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

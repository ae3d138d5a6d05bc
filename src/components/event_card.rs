//! Reusable card component for catalog entries.

use leptos::prelude::*;

use crate::state::catalog::EventSummary;

/// A single event card showing title, venue, date, and entry price.
#[component]
pub fn EventCard(event: EventSummary) -> impl IntoView {
    view! {
        <article class="event-card">
            <h3 class="event-card__title">{event.title}</h3>
            <p class="event-card__venue">{event.venue}</p>
            <div class="event-card__meta">
                <span class="event-card__date">{event.date_label}</span>
                <span class="event-card__price">{event.price_label}</span>
            </div>
        </article>
    }
}

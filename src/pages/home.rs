//! Landing page with a hero section and the featured events.

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::state::catalog;

/// Home page — hero copy plus the featured slice of the catalog.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Find your next night out"</h1>
                <p>"Concerts, theatre, festivals. Pick a seat, we hold it."</p>
                <a class="btn btn--primary" href="/events">
                    "Browse events"
                </a>
            </section>

            <section class="home-page__featured">
                <h2>"Featured events"</h2>
                <div class="home-page__grid">
                    {catalog::featured_events()
                        .iter()
                        .map(|&event| view! { <EventCard event=event/> })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}

//! Ticket and reservation pages.

use leptos::prelude::*;

/// My-tickets page.
#[component]
pub fn MyTicketsPage() -> impl IntoView {
    view! {
        <div class="empty-page">
            <h1>"My tickets"</h1>
            <p>"No tickets yet. Paid orders show up here."</p>
            <a class="btn btn--primary" href="/events">
                "Browse events"
            </a>
        </div>
    }
}

/// My-reservations page.
#[component]
pub fn MyReservationsPage() -> impl IntoView {
    view! {
        <div class="empty-page">
            <h1>"My reservations"</h1>
            <p>"No reservations yet. Seats held before checkout show up here."</p>
            <a class="btn btn--primary" href="/events">
                "Browse events"
            </a>
        </div>
    }
}

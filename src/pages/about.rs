//! Static company and legal pages.

use leptos::prelude::*;

/// About page.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="static-page">
            <h1>"About us"</h1>
            <p>
                "Eventa is a small box office for live events: concerts, theatre, "
                "festivals, and everything in between. We pick the lineup, you pick "
                "the seats."
            </p>
            <p>"Questions? The support team answers on the contact page."</p>
        </div>
    }
}

/// Terms of service page.
#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="static-page">
            <h1>"Terms of service"</h1>
            <p>
                "Tickets are valid only for the event printed on them. Reservations "
                "expire if not paid before the event starts. Resale above face value "
                "is not permitted."
            </p>
            <p>"Cancelled events are refunded in full to the original payment method."</p>
        </div>
    }
}

/// Privacy policy page.
#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="static-page">
            <h1>"Privacy policy"</h1>
            <p>
                "We store the details needed to issue your tickets and nothing else. "
                "No tracking pixels, no ad networks, no selling of attendee lists."
            </p>
            <p>"Write to support to have your account data removed."</p>
        </div>
    }
}

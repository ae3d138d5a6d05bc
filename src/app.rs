//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::about::{AboutPage, PrivacyPage, TermsPage};
use crate::pages::contact::ContactPage;
use crate::pages::events::EventsPage;
use crate::pages::home::HomePage;
use crate::pages::tickets::{MyReservationsPage, MyTicketsPage};
use crate::state::chat::ChatState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing. The
/// display mode is loaded from storage and applied to the root element
/// before the UI signal exists, so the first paint already matches the
/// persisted choice.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = crate::util::theme::init();

    let ui = RwSignal::new(UiState {
        theme,
        ..UiState::default()
    });
    let chat = RwSignal::new(ChatState::seeded());

    provide_context(ui);
    provide_context(chat);

    view! {
        <Title text="Eventa"/>

        <Router>
            <Navbar/>
            <main class="page-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("events") view=EventsPage/>
                    <Route path=StaticSegment("my-tickets") view=MyTicketsPage/>
                    <Route path=StaticSegment("my-reservations") view=MyReservationsPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("terms") view=TermsPage/>
                    <Route path=StaticSegment("privacy") view=PrivacyPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Mount the application into `document.body`. Called from the wasm entry;
/// without the `csr` feature this is a no-op.
pub fn run_app() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        log::debug!("mounting eventa-ui");
        leptos::mount::mount_to_body(App);
    }
}

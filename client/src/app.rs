//! Root application component with routing and the ticket hand-off context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::background::BackgroundDecor;
use crate::pages::{register::RegisterPage, ticket::TicketPage};
use crate::state::ticket::TicketState;

/// Route of the registration form.
pub const FORM_PATH: &str = "/";
/// Route of the ticket confirmation.
pub const TICKET_PATH: &str = "/ticket";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the ticket hand-off slot so the payload outlives the form page's
/// unmount but never leaves memory.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ticket = RwSignal::new(TicketState::default());
    provide_context(ticket);

    view! {
        <Stylesheet id="leptos" href="/pkg/conf-ticket.css"/>
        <Title text="Coding Conf 2025 | Ticket Generator"/>

        <Router>
            <div class="wrapper">
                <BackgroundDecor/>
                <main class="wrapper__content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=RegisterPage/>
                        <Route path=StaticSegment("ticket") view=TicketPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

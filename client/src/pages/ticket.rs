//! Ticket confirmation page.
//!
//! Renders the payload left by the registration page. Without one (a reload
//! or a typed URL) it sends the user back to the form. On unmount the payload
//! is cleared and its object URL released.

#[cfg(test)]
#[path = "ticket_test.rs"]
mod ticket_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::FORM_PATH;
use crate::components::ticket_card::TicketCard;
use crate::state::ticket::{TicketPayload, TicketState};
use crate::util::avatar_file::revoke_object_url;

/// Headline greeting, e.g. `Congrats, Jane Doe!`.
pub(crate) fn greeting(payload: &TicketPayload) -> String {
    format!("Congrats, {}!", payload.full_name)
}

/// Sentence confirming where the ticket was "sent".
pub(crate) fn email_notice(payload: &TicketPayload) -> String {
    format!(
        "We've emailed your ticket to {} and will send updates in the run up to the event.",
        payload.email
    )
}

#[component]
pub fn TicketPage() -> impl IntoView {
    let ticket = expect_context::<RwSignal<TicketState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if ticket.with(TicketState::needs_redirect) {
            navigate(FORM_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    on_cleanup(move || {
        if let Some(payload) = ticket.try_update(TicketState::take).flatten() {
            revoke_object_url(&payload.avatar_url);
        }
    });

    view! {
        <section class="ticket-page">
            {move || {
                ticket
                    .get()
                    .payload
                    .map(|payload| {
                        view! {
                            <h1 class="ticket-page__title">
                                {greeting(&payload)}
                                " Your ticket is ready."
                            </h1>
                            <p class="ticket-page__notice">{email_notice(&payload)}</p>
                            <TicketCard payload/>
                        }
                    })
            }}
        </section>
    }
}

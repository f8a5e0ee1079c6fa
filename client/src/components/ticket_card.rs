//! Conference ticket rendered on the confirmation page.

use leptos::prelude::*;

use crate::state::ticket::TicketPayload;

pub const EVENT_NAME: &str = "Coding Conf";
pub const EVENT_DATE_LINE: &str = "Jan 31, 2025 / Austin, TX";

#[component]
pub fn TicketCard(payload: TicketPayload) -> impl IntoView {
    let handle = payload.handle();
    view! {
        <article class="ticket-card">
            <header class="ticket-card__event">
                <p class="ticket-card__event-name">{EVENT_NAME}</p>
                <p class="ticket-card__event-date">{EVENT_DATE_LINE}</p>
            </header>
            <div class="ticket-card__attendee">
                <img class="ticket-card__avatar" src=payload.avatar_url alt="Attendee avatar"/>
                <div>
                    <p class="ticket-card__name">{payload.full_name}</p>
                    <p class="ticket-card__handle">{handle}</p>
                </div>
            </div>
            <p class="ticket-card__number">{payload.ticket_number}</p>
        </article>
    }
}

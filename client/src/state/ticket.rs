#[cfg(test)]
#[path = "ticket_test.rs"]
mod ticket_test;

use uuid::Uuid;

use crate::util::validation::ValidRegistration;

/// Values handed from the registration page to the ticket page.
///
/// Only constructible from a [`ValidRegistration`], so a payload always has
/// an avatar that passed type and size checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketPayload {
    pub avatar_url: String,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub ticket_number: String,
}

impl TicketPayload {
    pub fn new(registration: ValidRegistration, avatar_url: String, ticket_id: Uuid) -> Self {
        Self {
            avatar_url,
            full_name: registration.full_name,
            email: registration.email,
            username: registration.username,
            ticket_number: ticket_number(ticket_id),
        }
    }

    /// GitHub handle as printed on the ticket. A handle typed with its `@`
    /// is shown as is.
    pub fn handle(&self) -> String {
        if self.username.starts_with('@') { self.username.clone() } else { format!("@{}", self.username) }
    }
}

/// Five-digit ticket number derived from a ticket id, e.g. `#01609`.
pub fn ticket_number(id: Uuid) -> String {
    format!("#{:05}", id.as_u128() % 100_000)
}

/// Transient hand-off slot shared through context by the router shell.
///
/// Holds at most one payload. Nothing here is persisted; reloading the page
/// drops it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketState {
    pub payload: Option<TicketPayload>,
}

impl TicketState {
    /// Store a new payload, returning any previous one so its object URL can
    /// be released.
    pub fn hand_off(&mut self, payload: TicketPayload) -> Option<TicketPayload> {
        self.payload.replace(payload)
    }

    /// Remove and return the current payload.
    pub fn take(&mut self) -> Option<TicketPayload> {
        self.payload.take()
    }

    /// The ticket page has nothing to show and should send the user to the form.
    pub fn needs_redirect(&self) -> bool {
        self.payload.is_none()
    }
}

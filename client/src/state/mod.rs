//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Plain data types with small mutation helpers. Pages wrap them in
//! `RwSignal`s; only `TicketState` is provided through context.

pub mod registration;
pub mod ticket;

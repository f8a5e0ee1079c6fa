//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: pages own the signals and pass them down
//! as props or callbacks.

pub mod avatar_upload;
pub mod background;
pub mod field_error;
pub mod ticket_card;

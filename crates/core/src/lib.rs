//! Domain rules for the lendit item-sharing marketplace.
//!
//! This crate holds every decision the system makes that is not plain
//! persistence: the booking reply state machine, rental-window validation,
//! the booking-state query-token parser, pagination bounds, comment
//! eligibility, and the last/next booking projection. It has no internal
//! dependencies so both the repository layer and the HTTP layer (and any
//! future CLI tooling) can share it.

pub mod booking;
pub mod comment;
pub mod error;
pub mod pagination;
pub mod projection;
pub mod types;

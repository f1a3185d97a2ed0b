//! Booking status constants, the reply state machine, and rental-window
//! validation.
//!
//! A booking is created `WAITING` and is decided exactly once by the item
//! owner, moving it to one of the terminal statuses. The temporal
//! classification used by listing queries (`BookingState`) is derived at
//! query time and never stored.

use std::str::FromStr;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status of every booking: awaiting the owner's decision.
pub const STATUS_WAITING: &str = "WAITING";

/// Terminal status: the owner accepted the rental.
pub const STATUS_APPROVED: &str = "APPROVED";

/// Terminal status: the owner declined the rental.
pub const STATUS_REJECTED: &str = "REJECTED";

/// All valid stored status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_WAITING, STATUS_APPROVED, STATUS_REJECTED];

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

// ---------------------------------------------------------------------------
// Reply state machine
// ---------------------------------------------------------------------------

/// Decide the status an owner reply moves a booking into.
///
/// Only a `WAITING` booking may be decided; both terminal statuses reject
/// any further reply, which makes a second approve/reject call fail.
pub fn decide_reply(current: &str, approved: bool) -> Result<&'static str, String> {
    if current != STATUS_WAITING {
        return Err(format!(
            "Booking is already decided (status {current}); only WAITING bookings can be approved or rejected"
        ));
    }
    Ok(if approved {
        STATUS_APPROVED
    } else {
        STATUS_REJECTED
    })
}

// ---------------------------------------------------------------------------
// Rental window
// ---------------------------------------------------------------------------

/// Validate the requested rental window at creation time.
///
/// The window must be non-empty (`start < end`) and must not begin in the
/// past (`start >= now`).
pub fn validate_rental_window(
    start: Timestamp,
    end: Timestamp,
    now: Timestamp,
) -> Result<(), String> {
    if start >= end || start < now {
        return Err("Incorrect rental time".to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Listing state tokens
// ---------------------------------------------------------------------------

/// Query-time booking filter accepted by the listing endpoints.
///
/// `Waiting` and `Rejected` match the stored status literally; the other
/// variants classify bookings against the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl FromStr for BookingState {
    type Err = String;

    /// Parse a case-insensitive state token.
    ///
    /// The error message is a fixed string regardless of the input; API
    /// consumers match on it verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err("Unknown state: UNSUPPORTED_STATUS".to_string()),
        }
    }
}

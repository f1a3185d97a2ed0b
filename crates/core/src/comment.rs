//! Comment eligibility rules.
//!
//! A user may comment on an item only after actually renting it: there must
//! be at least one booking of the item by that user, and at least one of
//! those bookings must have ended before the comment is written.

use crate::types::{DbId, Timestamp};

/// Minimal booking view consumed by the eligibility check.
#[derive(Debug, Clone)]
pub struct BookingSnapshot {
    pub booker_id: DbId,
    pub end: Timestamp,
}

/// Outcome of the comment eligibility check; the two rejection reasons are
/// reported with distinct messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentEligibility {
    Eligible,
    /// The author has no booking on the item at all.
    NeverBooked,
    /// The author has bookings, but none of them has ended yet.
    RentalNotFinished,
}

/// Decide whether `author_id` may comment, given all bookings of the item.
pub fn check_comment_eligibility(
    item_bookings: &[BookingSnapshot],
    author_id: DbId,
    now: Timestamp,
) -> CommentEligibility {
    let mut booked = false;
    for booking in item_bookings {
        if booking.booker_id != author_id {
            continue;
        }
        booked = true;
        if booking.end < now {
            return CommentEligibility::Eligible;
        }
    }
    if booked {
        CommentEligibility::RentalNotFinished
    } else {
        CommentEligibility::NeverBooked
    }
}

/// Comments must carry text.
pub fn validate_comment_text(text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err("Comment text must not be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn snapshot(booker_id: DbId, end_offset_minutes: i64) -> BookingSnapshot {
        BookingSnapshot {
            booker_id,
            end: Utc::now() + Duration::minutes(end_offset_minutes),
        }
    }

    #[test]
    fn finished_booking_makes_author_eligible() {
        let bookings = vec![snapshot(7, -10)];
        assert_eq!(
            check_comment_eligibility(&bookings, 7, Utc::now()),
            CommentEligibility::Eligible
        );
    }

    #[test]
    fn author_without_bookings_is_never_booked() {
        let bookings = vec![snapshot(3, -10)];
        assert_eq!(
            check_comment_eligibility(&bookings, 7, Utc::now()),
            CommentEligibility::NeverBooked
        );
    }

    #[test]
    fn unfinished_rental_blocks_comment() {
        let bookings = vec![snapshot(7, 10)];
        assert_eq!(
            check_comment_eligibility(&bookings, 7, Utc::now()),
            CommentEligibility::RentalNotFinished
        );
    }

    #[test]
    fn one_finished_booking_among_open_ones_is_enough() {
        let bookings = vec![snapshot(7, 10), snapshot(7, -10)];
        assert_eq!(
            check_comment_eligibility(&bookings, 7, Utc::now()),
            CommentEligibility::Eligible
        );
    }

    #[test]
    fn booking_ending_exactly_now_is_not_finished() {
        let now = Utc::now();
        let bookings = vec![BookingSnapshot {
            booker_id: 7,
            end: now,
        }];
        assert_eq!(
            check_comment_eligibility(&bookings, 7, now),
            CommentEligibility::RentalNotFinished
        );
    }

    #[test]
    fn no_bookings_at_all_is_never_booked() {
        assert_eq!(
            check_comment_eligibility(&[], 7, Utc::now()),
            CommentEligibility::NeverBooked
        );
    }

    #[test]
    fn empty_text_rejected() {
        assert!(validate_comment_text("").is_err());
        assert!(validate_comment_text("great drill").is_ok());
    }
}

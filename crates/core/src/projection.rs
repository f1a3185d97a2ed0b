//! Derived booking projections for owner-facing item views.
//!
//! The "last"/"next" pair shown on an item is NOT a now-relative past/future
//! split: it is literally the first two entries of the item's bookings
//! sorted by start time ascending, and it only exists when the item has at
//! least two bookings. Reproduced as-is; renaming or re-deriving it would
//! change observable API behavior.

use crate::types::Timestamp;

/// Pick the last/next booking pair from a start-ascending booking list.
///
/// Returns `None` when the item has fewer than two bookings.
pub fn select_last_next<T>(sorted_by_start: &[T]) -> Option<(&T, &T)> {
    match sorted_by_start {
        [last, next, ..] => Some((last, next)),
        _ => None,
    }
}

/// Order an owner's item views for the list endpoint.
///
/// Items that carry booking data come first, ordered by their last booking's
/// start time descending; items without booking data keep their original
/// relative order and are appended afterwards.
pub fn order_by_last_booking<T>(
    items: Vec<T>,
    last_start: impl Fn(&T) -> Option<Timestamp>,
) -> Vec<T> {
    let mut with_booking: Vec<(Timestamp, T)> = Vec::new();
    let mut without_booking: Vec<T> = Vec::new();

    for item in items {
        match last_start(&item) {
            Some(start) => with_booking.push((start, item)),
            None => without_booking.push(item),
        }
    }

    with_booking.sort_by(|a, b| b.0.cmp(&a.0));

    let mut ordered: Vec<T> = with_booking.into_iter().map(|(_, item)| item).collect();
    ordered.extend(without_booking);
    ordered
}

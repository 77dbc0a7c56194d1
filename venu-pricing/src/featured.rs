use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use venu_domain::Listing;

/// Whether a listing's featured placement is live right now.
///
/// Expiry is derived from featured_until on every read; the stored
/// boolean alone is never trusted, so an expired listing drops out the
/// instant the clock passes the deadline with no state transition.
pub fn is_currently_featured(listing: &Listing, now: DateTime<Utc>) -> bool {
    listing.is_featured && listing.featured_until.map(|until| until > now).unwrap_or(true)
}

/// Ordering for search results: currently-featured listings first,
/// higher featured_priority winning among them.
pub fn featured_ordering(a: &Listing, b: &Listing, now: DateTime<Utc>) -> Ordering {
    let a_featured = is_currently_featured(a, now);
    let b_featured = is_currently_featured(b, now);
    match (a_featured, b_featured) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => b.featured_priority.cmp(&a.featured_priority),
        (false, false) => Ordering::Equal,
    }
}

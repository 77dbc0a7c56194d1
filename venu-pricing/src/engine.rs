use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use venu_domain::{BookingRequest, DiscountTier, Listing, SpecialPricingEntry};

/// Which promotion ended up applied to a quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppliedDiscount {
    DurationTier { min_hours: i32, percent: i32 },
    Sale { percent: i32, label: Option<String> },
}

impl AppliedDiscount {
    pub fn percent(&self) -> i32 {
        match self {
            AppliedDiscount::DurationTier { percent, .. } => *percent,
            AppliedDiscount::Sale { percent, .. } => *percent,
        }
    }
}

/// Fully resolved price for one candidate booking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_rate_cents: i64,
    pub effective_rate_cents: i64,
    pub hours: f64,
    pub subtotal_cents: i64,
    pub applied_discount: Option<AppliedDiscount>,
    pub bonus_hours_granted: i32,
    pub extra_guest_charge_cents: i64,
    pub total_cents: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("Booking duration must be positive, got {0} minutes")]
    InvalidDuration(i64),
}

/// Resolve the chargeable total for a candidate booking.
///
/// The steps run in a fixed order: special-pricing override, duration,
/// tier selection, sale window, discount combination, subtotal, bonus
/// hours, guest surcharge, total. A qualifying duration tier suppresses
/// the flat sale discount; the two are never summed. Bonus hours are
/// free and granted on top of whichever discount applied, and tier
/// qualification looks only at the paid hours.
pub fn resolve_price(
    listing: &Listing,
    special_pricing: &[SpecialPricingEntry],
    booking: &BookingRequest,
    now: DateTime<Utc>,
) -> Result<PriceBreakdown, PriceError> {
    let base_rate_cents = listing.hourly_rate_cents;
    let effective_rate_cents = special_pricing
        .iter()
        .find(|entry| entry.date == booking.date)
        .map(|entry| entry.hourly_rate_cents)
        .unwrap_or(base_rate_cents);

    let minutes = booking.duration_minutes();
    if minutes <= 0 {
        return Err(PriceError::InvalidDuration(minutes));
    }
    let hours = minutes as f64 / 60.0;

    let tier = select_tier(listing, hours);
    let sale = active_sale(listing, now.date_naive());

    let applied_discount = match (tier, sale) {
        (Some(tier), _) => Some(AppliedDiscount::DurationTier {
            min_hours: tier.min_hours,
            percent: tier.discount_percent,
        }),
        (None, Some(percent)) => Some(AppliedDiscount::Sale {
            percent,
            label: listing.discount_reason.clone(),
        }),
        (None, None) => None,
    };

    let percent = applied_discount.as_ref().map(|d| d.percent()).unwrap_or(0);
    let subtotal = effective_rate_cents as f64 * hours * (1.0 - percent as f64 / 100.0);
    let subtotal_cents = subtotal.round() as i64;

    let bonus_hours_granted = listing
        .bonus_hours_offer
        .as_ref()
        .filter(|offer| hours >= offer.min_hours as f64)
        .map(|offer| offer.bonus_hours)
        .unwrap_or(0);

    let extra_guests = (booking.guests - listing.included_guests).max(0) as i64;
    let extra_guest_charge_cents = extra_guests * listing.extra_guest_charge_cents;

    let total_cents = (subtotal_cents + extra_guest_charge_cents).max(0);

    debug!(
        "Resolved price for listing {}: {} cents over {} hours ({:?})",
        listing.id, total_cents, hours, applied_discount
    );

    Ok(PriceBreakdown {
        base_rate_cents,
        effective_rate_cents,
        hours,
        subtotal_cents,
        applied_discount,
        bonus_hours_granted,
        extra_guest_charge_cents,
        total_cents,
    })
}

/// Highest qualifying tier wins, regardless of its configured percent
fn select_tier(listing: &Listing, hours: f64) -> Option<&DiscountTier> {
    listing
        .duration_discounts
        .as_ref()?
        .tiers
        .iter()
        .filter(|tier| tier.min_hours as f64 <= hours)
        .max_by_key(|tier| tier.min_hours)
}

/// Flat sale percent if the sale is configured and the window covers today.
/// A missing bound leaves that side of the window open.
fn active_sale(listing: &Listing, today: NaiveDate) -> Option<i32> {
    if listing.discount_percent <= 0 {
        return None;
    }
    if let Some(from) = listing.discount_from {
        if today < from {
            return None;
        }
    }
    if let Some(until) = listing.discount_until {
        if today > until {
            return None;
        }
    }
    Some(listing.discount_percent)
}

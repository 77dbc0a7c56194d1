use crate::api::{BookingConfirmation, ClientError, ListingApi};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use venu_availability::{AvailabilityResolver, RejectionReason};
use venu_domain::BookingRequest;
use venu_pricing::{resolve_price, PriceBreakdown, PriceError};

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Price(#[from] PriceError),
}

/// Price preview for a candidate booking. A rejected quote carries no
/// breakdown so the UI never shows a stale number next to an
/// unavailable date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub bookable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<PriceBreakdown>,
}

impl Quote {
    fn rejected(reason: RejectionReason) -> Self {
        Self {
            bookable: false,
            reason: Some(reason),
            breakdown: None,
        }
    }
}

/// Composes the availability resolver and the price engine over data
/// fetched from the listing API. All local checks are advisory; the
/// backend re-derives both availability and price when the booking is
/// committed.
pub struct BookingPreview<A: ListingApi> {
    api: A,
    resolver: AvailabilityResolver,
}

impl<A: ListingApi> BookingPreview<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            resolver: AvailabilityResolver::default(),
        }
    }

    pub fn with_resolver(api: A, resolver: AvailabilityResolver) -> Self {
        Self { api, resolver }
    }

    pub async fn quote(
        &self,
        request: &BookingRequest,
        now: DateTime<Utc>,
    ) -> Result<Quote, PreviewError> {
        let listing = self.api.fetch_listing(request.listing_id).await?;
        let blocked = self.api.fetch_blocked_dates(request.listing_id).await?;

        let availability = self
            .resolver
            .check_date(&listing, &blocked, request.date, now);
        if let Some(reason) = availability.reason {
            return Ok(Quote::rejected(reason));
        }

        // The server may know about conflicts the local rules cannot see
        let unavailable = self
            .api
            .fetch_unavailable_dates(request.listing_id, request.date)
            .await?;
        if unavailable.contains(&request.date) {
            return Ok(Quote::rejected(RejectionReason::Blocked));
        }

        if let Some(reason) =
            self.resolver
                .validate_duration(&listing, request.start_time, request.end_time)
        {
            return Ok(Quote::rejected(reason));
        }

        let special = self.api.fetch_special_pricing(request.listing_id).await?;
        let breakdown = resolve_price(&listing, &special, request, now)?;

        Ok(Quote {
            bookable: true,
            reason: None,
            breakdown: Some(breakdown),
        })
    }

    /// Commit the booking. The server's total is the charge amount; a
    /// divergent local prediction is replaced, never asserted against.
    pub async fn confirm(
        &self,
        request: &BookingRequest,
        predicted: &PriceBreakdown,
    ) -> Result<BookingConfirmation, PreviewError> {
        let confirmation = self.api.create_booking(request).await?;

        if confirmation.total_cents != predicted.total_cents {
            warn!(
                "Server priced booking {} at {} cents, preview said {}; using the server value",
                confirmation.booking_id, confirmation.total_cents, predicted.total_cents
            );
        } else {
            info!("Booking {} confirmed", confirmation.booking_id);
        }

        Ok(confirmation)
    }
}

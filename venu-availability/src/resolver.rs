use crate::slots::{self, TimeRange};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use venu_domain::{BlockedDateRange, Listing};

/// Why a candidate date or duration was turned down. These are normal
/// control-flow outcomes surfaced to the guest, not errors; the backend
/// re-checks authoritatively when the booking is created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionReason {
    TooSoon,
    TooFar,
    Blocked,
    Closed,
    DurationOutOfRange,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub bookable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
}

impl Availability {
    pub fn ok() -> Self {
        Self {
            bookable: true,
            reason: None,
        }
    }

    pub fn rejected(reason: RejectionReason) -> Self {
        Self {
            bookable: false,
            reason: Some(reason),
        }
    }
}

/// Resolver tunables. The defaults are the platform's shipped values:
/// 30-minute slot grid, a 60-minute floor on every slot, and a
/// 09:00-21:00 window for weekdays the host never configured.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_increment")]
    pub slot_increment_minutes: i64,
    #[serde(default = "default_min_slot")]
    pub min_slot_minutes: i64,
    #[serde(default = "default_open")]
    pub default_open: NaiveTime,
    #[serde(default = "default_close")]
    pub default_close: NaiveTime,
}

fn default_increment() -> i64 {
    30
}
fn default_min_slot() -> i64 {
    60
}
fn default_open() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
}
fn default_close() -> NaiveTime {
    NaiveTime::from_hms_opt(21, 0, 0).unwrap_or_default()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            slot_increment_minutes: default_increment(),
            min_slot_minutes: default_min_slot(),
            default_open: default_open(),
            default_close: default_close(),
        }
    }
}

/// Advisory pre-validation for a candidate booking date. Every check is
/// pure and local; the booking-creation API remains the authority.
pub struct AvailabilityResolver {
    config: ResolverConfig,
}

impl AvailabilityResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Run the date-level checks in their fixed order: advance-notice
    /// floor, advance ceiling, blocked ranges, weekday closure.
    pub fn check_date(
        &self,
        listing: &Listing,
        blocked: &[BlockedDateRange],
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Availability {
        let earliest = (now + Duration::hours(listing.min_advance_hours)).date_naive();
        if date < earliest {
            return Availability::rejected(RejectionReason::TooSoon);
        }

        let latest = (now + Duration::days(listing.max_advance_days)).date_naive();
        if date > latest {
            return Availability::rejected(RejectionReason::TooFar);
        }

        if let Some(range) = blocked.iter().find(|range| range.contains(date)) {
            debug!(
                "Date {} blocked for listing {} ({:?})",
                date, listing.id, range.reason
            );
            return Availability::rejected(RejectionReason::Blocked);
        }

        if self.operating_window(listing, date).is_none() {
            return Availability::rejected(RejectionReason::Closed);
        }

        Availability::ok()
    }

    /// The bookable window for the date's weekday. Unconfigured days use
    /// the platform default window; explicitly closed days return None.
    pub fn operating_window(&self, listing: &Listing, date: NaiveDate) -> Option<TimeRange> {
        use chrono::Datelike;
        match listing.operating_hours.for_weekday(date.weekday()) {
            Some(hours) if hours.closed => None,
            Some(hours) => Some(TimeRange::new(hours.start, hours.end)),
            None => Some(TimeRange::new(
                self.config.default_open,
                self.config.default_close,
            )),
        }
    }

    /// Enforce the listing's own duration bracket on a chosen time pair
    pub fn validate_duration(
        &self,
        listing: &Listing,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Option<RejectionReason> {
        let minutes = end.signed_duration_since(start).num_minutes();
        if minutes < i64::from(listing.min_hours) * 60 || minutes > i64::from(listing.max_hours) * 60 {
            return Some(RejectionReason::DurationOutOfRange);
        }
        None
    }

    pub fn start_slots(&self, window: &TimeRange) -> Vec<NaiveTime> {
        slots::start_slots(
            window,
            self.config.slot_increment_minutes,
            self.config.min_slot_minutes,
        )
    }

    pub fn end_slots(&self, window: &TimeRange, chosen_start: NaiveTime) -> Vec<NaiveTime> {
        slots::end_slots(
            window,
            chosen_start,
            self.config.slot_increment_minutes,
            self.config.min_slot_minutes,
        )
    }
}

impl Default for AvailabilityResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

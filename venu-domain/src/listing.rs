use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pricing-relevant subset of a venue listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: Uuid,
    /// Base price per hour in minor currency units, always > 0
    pub hourly_rate_cents: i64,

    /// Flat sale discount, 0 means no sale configured
    pub discount_percent: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_until: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_discounts: Option<DurationDiscounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_hours_offer: Option<BonusHoursOffer>,

    /// Booking settings
    pub min_advance_hours: i64,
    pub max_advance_days: i64,
    pub min_hours: i32,
    pub max_hours: i32,
    pub auto_confirm: bool,
    pub instant_booking: bool,

    /// Promotion placement, expiry is derived from featured_until
    pub is_featured: bool,
    pub featured_priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_until: Option<DateTime<Utc>>,

    pub capacity: i32,
    pub min_capacity: i32,
    pub included_guests: i32,
    pub extra_guest_charge_cents: i64,

    #[serde(default)]
    pub operating_hours: WeekSchedule,
}

/// Ordered duration-discount tiers attached to a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DurationDiscounts {
    pub tiers: Vec<DiscountTier>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiscountTier {
    pub min_hours: i32,
    pub discount_percent: i32,
}

/// Extra unpaid hours granted when a minimum paid duration is booked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BonusHoursOffer {
    pub min_hours: i32,
    pub bonus_hours: i32,
    pub label: String,
}

/// Weekly operating schedule. A missing day falls back to the platform
/// default window, an explicitly closed day is not bookable at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekSchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<DayHours>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHours {
    #[serde(default)]
    pub closed: bool,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl WeekSchedule {
    pub fn for_weekday(&self, weekday: Weekday) -> Option<&DayHours> {
        match weekday {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }
}

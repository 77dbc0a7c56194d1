use chrono::NaiveDate;
use serde::Deserialize;
use venu_domain::{BonusHoursOffer, DiscountTier, SpecialPricingEntry};

/// Tunable caps for host-authored promotion rules. Defaults match the
/// platform's shipped limits.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleLimits {
    #[serde(default = "default_max_tiers")]
    pub max_tiers: usize,
    #[serde(default = "default_max_sale_span_days")]
    pub max_sale_span_days: i64,
    #[serde(default = "default_min_promotion_days")]
    pub min_promotion_days: i64,
    #[serde(default = "default_max_promotion_days")]
    pub max_promotion_days: i64,
}

fn default_max_tiers() -> usize {
    5
}
fn default_max_sale_span_days() -> i64 {
    90
}
fn default_min_promotion_days() -> i64 {
    3
}
fn default_max_promotion_days() -> i64 {
    30
}

impl Default for RuleLimits {
    fn default() -> Self {
        Self {
            max_tiers: default_max_tiers(),
            max_sale_span_days: default_max_sale_span_days(),
            min_promotion_days: default_min_promotion_days(),
            max_promotion_days: default_max_promotion_days(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Tier {index}: minHours {min_hours} must be between 1 and 24")]
    TierMinHoursOutOfRange { index: usize, min_hours: i32 },

    #[error("Tier {index}: discountPercent {percent} must be between 1 and 50")]
    TierPercentOutOfRange { index: usize, percent: i32 },

    #[error("Tier {index}: duplicate minHours {min_hours}")]
    DuplicateTierMinHours { index: usize, min_hours: i32 },

    #[error("Too many tiers: {count} exceeds the limit of {max}")]
    TooManyTiers { count: usize, max: usize },

    #[error("Sale discountPercent {0} must be between 1 and 90")]
    SalePercentOutOfRange(i32),

    #[error("Sale window start must be before its end")]
    SaleWindowInverted,

    #[error("Sale window of {days} days exceeds the limit of {max}")]
    SaleWindowTooLong { days: i64, max: i64 },

    #[error("Sale label must be at least 3 characters")]
    SaleLabelTooShort,

    #[error("Bonus minHours {0} must be between 1 and 24")]
    BonusMinHoursOutOfRange(i32),

    #[error("bonusHours {0} must be between 1 and 3")]
    BonusHoursOutOfRange(i32),

    #[error("Promotion window of {days} days must be between {min} and {max}")]
    PromotionWindowOutOfRange { days: i64, min: i64, max: i64 },

    #[error("Special pricing rate must be positive")]
    NonPositiveRate,

    #[error("Special pricing already exists for {0}")]
    DuplicateSpecialPricingDate(NaiveDate),
}

/// Validate a host-edited tier list before it is persisted. Also reused
/// client-side on the edit form, so the outcome must be identical on
/// both sides.
pub fn validate_tiers(tiers: &[DiscountTier], limits: &RuleLimits) -> Result<(), ValidationError> {
    if tiers.len() > limits.max_tiers {
        return Err(ValidationError::TooManyTiers {
            count: tiers.len(),
            max: limits.max_tiers,
        });
    }
    for (index, tier) in tiers.iter().enumerate() {
        if !(1..=24).contains(&tier.min_hours) {
            return Err(ValidationError::TierMinHoursOutOfRange {
                index,
                min_hours: tier.min_hours,
            });
        }
        if !(1..=50).contains(&tier.discount_percent) {
            return Err(ValidationError::TierPercentOutOfRange {
                index,
                percent: tier.discount_percent,
            });
        }
        if tiers[..index].iter().any(|t| t.min_hours == tier.min_hours) {
            return Err(ValidationError::DuplicateTierMinHours {
                index,
                min_hours: tier.min_hours,
            });
        }
    }
    Ok(())
}

pub fn validate_flat_sale(
    percent: i32,
    from: Option<NaiveDate>,
    until: Option<NaiveDate>,
    label: &str,
    limits: &RuleLimits,
) -> Result<(), ValidationError> {
    if !(1..=90).contains(&percent) {
        return Err(ValidationError::SalePercentOutOfRange(percent));
    }
    if let (Some(from), Some(until)) = (from, until) {
        if from >= until {
            return Err(ValidationError::SaleWindowInverted);
        }
        let days = (until - from).num_days();
        if days > limits.max_sale_span_days {
            return Err(ValidationError::SaleWindowTooLong {
                days,
                max: limits.max_sale_span_days,
            });
        }
    }
    if label.trim().len() < 3 {
        return Err(ValidationError::SaleLabelTooShort);
    }
    Ok(())
}

pub fn validate_bonus_offer(offer: &BonusHoursOffer) -> Result<(), ValidationError> {
    if !(1..=24).contains(&offer.min_hours) {
        return Err(ValidationError::BonusMinHoursOutOfRange(offer.min_hours));
    }
    if !(1..=3).contains(&offer.bonus_hours) {
        return Err(ValidationError::BonusHoursOutOfRange(offer.bonus_hours));
    }
    Ok(())
}

pub fn validate_promotion_window(
    start: NaiveDate,
    end: NaiveDate,
    limits: &RuleLimits,
) -> Result<(), ValidationError> {
    let days = (end - start).num_days();
    if days < limits.min_promotion_days || days > limits.max_promotion_days {
        return Err(ValidationError::PromotionWindowOutOfRange {
            days,
            min: limits.min_promotion_days,
            max: limits.max_promotion_days,
        });
    }
    Ok(())
}

/// One entry per exact date is enforced here even though the backing API
/// historically accepted duplicates.
pub fn validate_special_pricing(
    existing: &[SpecialPricingEntry],
    date: NaiveDate,
    hourly_rate_cents: i64,
) -> Result<(), ValidationError> {
    if hourly_rate_cents <= 0 {
        return Err(ValidationError::NonPositiveRate);
    }
    if existing.iter().any(|entry| entry.date == date) {
        return Err(ValidationError::DuplicateSpecialPricingDate(date));
    }
    Ok(())
}

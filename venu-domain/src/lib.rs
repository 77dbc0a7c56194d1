pub mod booking;
pub mod calendar;
pub mod listing;
pub mod promotion;

pub use booking::BookingRequest;
pub use calendar::{BlockedDateRange, SpecialPricingEntry};
pub use listing::{BonusHoursOffer, DayHours, DiscountTier, DurationDiscounts, Listing, WeekSchedule};
pub use promotion::{PromotionRequest, PromotionStatus};

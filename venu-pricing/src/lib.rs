pub mod engine;
pub mod featured;
pub mod validate;

pub use engine::{resolve_price, AppliedDiscount, PriceBreakdown, PriceError};
pub use featured::{featured_ordering, is_currently_featured};
pub use validate::{
    validate_bonus_offer, validate_flat_sale, validate_promotion_window, validate_special_pricing,
    validate_tiers, RuleLimits, ValidationError,
};

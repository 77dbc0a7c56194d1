use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use uuid::Uuid;
use venu_availability::{AvailabilityResolver, RejectionReason};
use venu_domain::{
    BonusHoursOffer, BookingRequest, DiscountTier, DurationDiscounts, Listing, SpecialPricingEntry,
    WeekSchedule,
};
use venu_pricing::{resolve_price, validate_tiers, AppliedDiscount, RuleLimits};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 18, 12, 0, 0).unwrap()
}

fn listing(hourly_rate_cents: i64) -> Listing {
    Listing {
        id: Uuid::new_v4(),
        hourly_rate_cents,
        discount_percent: 0,
        discount_from: None,
        discount_until: None,
        discount_reason: None,
        duration_discounts: None,
        bonus_hours_offer: None,
        min_advance_hours: 24,
        max_advance_days: 90,
        min_hours: 1,
        max_hours: 12,
        auto_confirm: true,
        instant_booking: false,
        is_featured: false,
        featured_priority: 0,
        featured_until: None,
        capacity: 30,
        min_capacity: 1,
        included_guests: 15,
        extra_guest_charge_cents: 0,
        operating_hours: WeekSchedule::default(),
    }
}

fn booking(listing_id: Uuid, date: NaiveDate, start: (u32, u32), end: (u32, u32), guests: i32) -> BookingRequest {
    BookingRequest {
        listing_id,
        date,
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        guests,
    }
}

#[test]
fn weekend_deal_quote() {
    // Flat 25% sale spanning yesterday..tomorrow, no tiers, 3 paid hours
    let mut venue = listing(50_000);
    venue.discount_percent = 25;
    venue.discount_from = Some(now().date_naive() - Duration::days(1));
    venue.discount_until = Some(now().date_naive() + Duration::days(1));
    venue.discount_reason = Some("Weekend Deal".to_string());

    let date = now().date_naive() + Duration::days(2);
    let request = booking(venue.id, date, (14, 0), (17, 0), 10);

    let resolver = AvailabilityResolver::default();
    let availability = resolver.check_date(&venue, &[], date, now());
    assert!(availability.bookable);
    assert_eq!(
        resolver.validate_duration(&venue, request.start_time, request.end_time),
        None
    );

    let breakdown = resolve_price(&venue, &[], &request, now()).unwrap();
    assert_eq!(breakdown.total_cents, 112_500);
    assert_eq!(
        breakdown.applied_discount,
        Some(AppliedDiscount::Sale {
            percent: 25,
            label: Some("Weekend Deal".to_string())
        })
    );
}

#[test]
fn long_booking_prefers_tier_and_stacks_bonus_hours() {
    let mut venue = listing(100_000);
    venue.discount_percent = 20;
    venue.duration_discounts = Some(DurationDiscounts {
        tiers: vec![
            DiscountTier {
                min_hours: 4,
                discount_percent: 10,
            },
            DiscountTier {
                min_hours: 6,
                discount_percent: 15,
            },
        ],
    });
    venue.bonus_hours_offer = Some(BonusHoursOffer {
        min_hours: 6,
        bonus_hours: 2,
        label: "All-day bonus".to_string(),
    });

    let date = now().date_naive() + Duration::days(7);
    let request = booking(venue.id, date, (9, 0), (17, 0), 12);

    let breakdown = resolve_price(&venue, &[], &request, now()).unwrap();

    // 8 paid hours: the 6h tier wins over the active sale, never both
    assert_eq!(breakdown.subtotal_cents, 680_000);
    assert_eq!(
        breakdown.applied_discount,
        Some(AppliedDiscount::DurationTier {
            min_hours: 6,
            percent: 15
        })
    );
    // Bonus hours ride along without touching the paid-hour math
    assert_eq!(breakdown.bonus_hours_granted, 2);
    assert_eq!(breakdown.total_cents, 680_000);
}

#[test]
fn special_date_rate_feeds_the_discount() {
    let mut venue = listing(50_000);
    venue.discount_percent = 10;

    let date = now().date_naive() + Duration::days(3);
    let special = vec![SpecialPricingEntry {
        id: Uuid::new_v4(),
        date,
        hourly_rate_cents: 90_000,
        reason: Some("Festival weekend".to_string()),
    }];
    let request = booking(venue.id, date, (10, 0), (12, 0), 5);

    let breakdown = resolve_price(&venue, &special, &request, now()).unwrap();
    assert_eq!(breakdown.effective_rate_cents, 90_000);
    // 900.00 * 2h * 0.90: the sale discounts the overridden rate
    assert_eq!(breakdown.total_cents, 162_000);
}

#[test]
fn availability_gating_precedes_pricing() {
    let venue = listing(50_000);
    let resolver = AvailabilityResolver::default();

    // Same-day request loses to the 24h advance-notice floor
    let availability = resolver.check_date(&venue, &[], now().date_naive(), now());
    assert_eq!(availability.reason, Some(RejectionReason::TooSoon));
}

#[test]
fn tier_validation_survives_a_wire_round_trip() {
    let tiers = vec![
        DiscountTier {
            min_hours: 4,
            discount_percent: 10,
        },
        DiscountTier {
            min_hours: 4,
            discount_percent: 20,
        },
    ];
    let limits = RuleLimits::default();

    // Checked before submit
    let client_side = validate_tiers(&tiers, &limits);
    assert!(client_side.is_err());

    // Replayed after JSON round trip, as the backend would see it
    let wire = serde_json::to_string(&tiers).unwrap();
    let replayed: Vec<DiscountTier> = serde_json::from_str(&wire).unwrap();
    assert_eq!(validate_tiers(&replayed, &limits), client_side);
}

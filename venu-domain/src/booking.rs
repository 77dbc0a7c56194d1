use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input for a price quote and for the booking-creation API.
/// The engine never persists this; the backend re-derives the
/// authoritative price when the booking is committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub listing_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub guests: i32,
}

impl BookingRequest {
    pub fn duration_minutes(&self) -> i64 {
        self.end_time
            .signed_duration_since(self.start_time)
            .num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_minutes() {
        let req = BookingRequest {
            listing_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 4, 20).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(13, 30, 0).unwrap(),
            guests: 4,
        };
        assert_eq!(req.duration_minutes(), 210);
    }

    #[test]
    fn test_inverted_times_are_negative() {
        let req = BookingRequest {
            listing_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 4, 20).unwrap(),
            start_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            guests: 1,
        };
        assert!(req.duration_minutes() < 0);
    }
}

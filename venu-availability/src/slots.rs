use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// An operating window within a single day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_minutes()
    }
}

/// Candidate start times across the window. A start is offered only if
/// the shortest bookable slot still fits before the window closes.
pub fn start_slots(window: &TimeRange, increment_minutes: i64, min_slot_minutes: i64) -> Vec<NaiveTime> {
    let end = minutes_from_midnight(window.end);
    let mut slots = Vec::new();
    let mut m = minutes_from_midnight(window.start);
    while m + min_slot_minutes <= end {
        if let Some(t) = time_from_minutes(m) {
            slots.push(t);
        }
        m += increment_minutes;
    }
    slots
}

/// Candidate end times for a chosen start. The first valid end sits
/// min_slot_minutes after the start, the rest follow in fixed
/// increments up to the window close.
pub fn end_slots(
    window: &TimeRange,
    chosen_start: NaiveTime,
    increment_minutes: i64,
    min_slot_minutes: i64,
) -> Vec<NaiveTime> {
    let end = minutes_from_midnight(window.end);
    let mut slots = Vec::new();
    let mut m = minutes_from_midnight(chosen_start) + min_slot_minutes;
    while m <= end {
        if let Some(t) = time_from_minutes(m) {
            slots.push(t);
        }
        m += increment_minutes;
    }
    slots
}

fn minutes_from_midnight(t: NaiveTime) -> i64 {
    i64::from(t.num_seconds_from_midnight()) / 60
}

fn time_from_minutes(m: i64) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt((m / 60) as u32, (m % 60) as u32, 0)
}
